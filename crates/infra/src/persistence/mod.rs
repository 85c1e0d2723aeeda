//! Persistence backends.
//!
//! Only an in-memory backend lives here; database-backed implementations plug
//! into the same `CategoryRepository` / `UnitOfWork` ports.

pub mod in_memory;

pub use in_memory::InMemoryCatalog;
