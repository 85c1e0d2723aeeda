//! Reusable field-validation primitives.
//!
//! Every helper takes the candidate value and a field label, and fails with a
//! single [`DomainError::Validation`] message. Helpers are meant to be chained
//! with `?`, so the first violated rule wins and later rules never run.
//!
//! Lengths are counted in `char`s, not bytes.

use crate::error::{DomainError, DomainResult};

/// Fails when `target` is absent. Returns the unwrapped value otherwise.
pub fn not_null<T>(target: Option<T>, field_name: &str) -> DomainResult<T> {
    target.ok_or_else(|| DomainError::validation(format!("{field_name} should not be null")))
}

/// Fails when `target` is absent, empty, or only whitespace.
pub fn not_null_or_empty<'a>(target: Option<&'a str>, field_name: &str) -> DomainResult<&'a str> {
    match target {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(DomainError::validation(format!(
            "{field_name} should not be null or empty"
        ))),
    }
}

/// Fails when `target` is shorter than `min_length` characters.
pub fn min_length(target: &str, min_length: usize, field_name: &str) -> DomainResult<()> {
    if target.chars().count() < min_length {
        return Err(DomainError::validation(format!(
            "{field_name} should not be less than {min_length} characters long"
        )));
    }
    Ok(())
}

/// Fails when `target` is longer than `max_length` characters.
pub fn max_length(target: &str, max_length: usize, field_name: &str) -> DomainResult<()> {
    if target.chars().count() > max_length {
        return Err(DomainError::validation(format!(
            "{field_name} should not be longer than {max_length} characters"
        )));
    }
    Ok(())
}

/// Replaces the message of a failed validation with a caller-specific one.
///
/// Aggregates phrase their own messages (e.g. `"Name should be at least 3
/// characters long"`) while reusing the generic predicates above. Non-validation
/// errors pass through untouched.
pub trait WithMessage<T> {
    fn with_message(self, message: &str) -> DomainResult<T>;
}

impl<T> WithMessage<T> for DomainResult<T> {
    fn with_message(self, message: &str) -> DomainResult<T> {
        self.map_err(|err| match err {
            DomainError::Validation(_) => DomainError::validation(message),
            other => other,
        })
    }
}
