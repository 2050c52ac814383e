//! Shared domain types, error taxonomy, and input validation.

pub mod error;
pub mod types;
pub mod validation;
