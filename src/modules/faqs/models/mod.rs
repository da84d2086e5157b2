pub mod faq;

pub use faq::Faq;
