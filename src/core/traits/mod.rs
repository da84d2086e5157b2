pub mod repository;

pub use repository::CrudRepository;
