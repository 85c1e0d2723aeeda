//! Infrastructure layer: concrete backends for the application ports.

pub mod persistence;

pub use persistence::InMemoryCatalog;
