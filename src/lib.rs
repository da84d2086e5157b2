//! SimpleDMS departmental data-management backend
//!
//! Three resource families (departments, employees, FAQs) served over JSON
//! REST by one generic controller/service/repository stack.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::departments;
pub use modules::employees;
pub use modules::faqs;
pub use modules::Services;
