// Employees module

pub mod models;

pub use models::Employee;

use crate::core::crud::CrudService;

pub type EmployeeService = CrudService<Employee>;
