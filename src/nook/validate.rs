//! Structural checks on untrusted snapshot JSON.
//!
//! Validation short-circuits: the first violation is reported as a single
//! human-readable reason and nothing else is inspected. Empty `categories`
//! or `items` arrays are valid. Nothing is mutated.

use crate::error::{NookError, Result};
use serde_json::Value;

/// Checks an externally supplied snapshot against the exchange schema
/// before it is trusted. On success the value is safe to hand to
/// [`crate::normalize::normalize`].
pub fn validate(data: &Value) -> Result<()> {
    let root = data
        .as_object()
        .ok_or_else(|| invalid("Invalid data format"))?;

    let categories = root
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("Categories array is required"))?;

    for category in categories {
        if !has_nonempty_string(category, "name") {
            return Err(invalid("Each category must have a name"));
        }
        let items = category
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| invalid("Each category must have an items array"))?;

        for item in items {
            if !has_nonempty_string(item, "name") {
                return Err(invalid("Each item must have a name"));
            }
            if item.get("tags").and_then(Value::as_array).is_none() {
                return Err(invalid("Each item must have a tags array"));
            }
        }
    }

    Ok(())
}

fn has_nonempty_string(value: &Value, key: &str) -> bool {
    matches!(value.get(key), Some(Value::String(s)) if !s.is_empty())
}

fn invalid(reason: &str) -> NookError {
    NookError::InvalidSnapshot(reason.to_string())
}
