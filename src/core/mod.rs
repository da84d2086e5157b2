pub mod crud;
pub mod error;
pub mod persistence;
pub mod resource;
pub mod traits;

pub use error::{AppError, Result};
pub use resource::{DeleteStrategy, Resource};
