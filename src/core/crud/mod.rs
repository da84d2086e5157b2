pub mod controller;
pub mod service;

pub use controller::resource_scope;
pub use service::CrudService;
