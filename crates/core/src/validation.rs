//! Field-level validation helpers.
//!
//! Request DTOs declare their rules with `validator` derives; this module
//! flattens the resulting [`ValidationErrors`] into the `field -> message`
//! map rendered in 400 responses.

use std::collections::BTreeMap;

use heck::ToLowerCamelCase;
use validator::ValidationErrors;

/// Field name to human-readable message, one entry per failing field.
///
/// A `BTreeMap` keeps the rendered `errors` object in a stable order.
pub type FieldErrors = BTreeMap<String, String>;

/// Flatten `validator` output into one message per field.
///
/// When a field fails several rules, the first recorded message wins.
/// Rules without an explicit message fall back to the rule code.
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let Some(first) = field_errors.first() else {
            continue;
        };
        let message = match &first.message {
            Some(msg) => msg.to_string(),
            None => format!("{field} failed '{}' validation", first.code),
        };
        out.entry(field.to_lower_camel_case()).or_insert(message);
    }
    out
}

/// True when the value is empty or contains only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
