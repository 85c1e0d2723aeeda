//! Application layer: use cases orchestrating domain aggregates and persistence ports.
//!
//! Use cases depend on ports (`CategoryRepository`, `UnitOfWork`) only; concrete
//! backends are injected by the caller.

pub mod error;
pub mod unit_of_work;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use unit_of_work::{UnitOfWork, UnitOfWorkError, UnitOfWorkResult};
pub use use_cases::category::create_category::{
    CreateCategory, CreateCategoryInput, CreateCategoryOutput, CreateCategoryUseCase,
};
