// FAQ module

pub mod models;

pub use models::Faq;

use crate::core::crud::CrudService;

pub type FaqService = CrudService<Faq>;
