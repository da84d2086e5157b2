// Departments module

pub mod models;

pub use models::Department;

use crate::core::crud::CrudService;

pub type DepartmentService = CrudService<Department>;
