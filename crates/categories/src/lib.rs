//! Categories domain module.
//!
//! This crate contains the business rules for catalog categories, implemented
//! as deterministic domain logic, plus the persistence ports the application
//! layer depends on. It performs no IO itself.

pub mod category;
pub mod repository;

pub use category::{Category, CategoryId};
pub use repository::{CategoryRepository, GenericRepository, RepositoryError, RepositoryResult};
