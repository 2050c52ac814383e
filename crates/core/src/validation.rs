//! Helpers for turning `validator` failures into field-keyed messages.
//!
//! Request DTOs derive [`validator::Validate`]; handlers call `.validate()`
//! before touching the database. This module flattens the resulting
//! [`ValidationErrors`] into a `field -> [messages]` map suitable for a JSON
//! error body.

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Flatten [`ValidationErrors`] into a sorted `field -> [messages]` map.
///
/// Messages come from the `message = "..."` attribute on the DTO field; a
/// rule without an explicit message falls back to its rule code (e.g.
/// `"email"`), which should be treated as a bug in the DTO definition.
pub fn message_map(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    for (field, errs) in errors.field_errors() {
        let messages: Vec<String> = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        map.insert(field.to_string(), messages);
    }
    map
}
