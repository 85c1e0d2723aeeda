//! Aggregate root trait for state-based domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// An aggregate root is the entity through which a consistency boundary is
/// loaded, mutated and persisted. Repositories are parameterized over it, so
/// persistence ports never accept inner entities directly.
///
/// Implementors enforce their own invariants in constructors and mutators; an
/// aggregate value is never observable in an invalid state.
pub trait AggregateRoot: Entity {}
