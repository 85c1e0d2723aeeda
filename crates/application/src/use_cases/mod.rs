//! Use cases, grouped per aggregate.

pub mod category;
