//! SQLite storage implementation for the tag registry.

mod model;
mod repository;

pub use model::TagDB;
pub use repository::TagRepository;
