//! Default-filling on validated snapshots.
//!
//! Produces typed categories from snapshot JSON that
//! [`crate::validate::validate`] has already accepted. Present values are
//! never altered; only missing or unusable optional fields get defaults.

use crate::env::{Clock, IdGen};
use crate::model::{Category, Item, SortOrder};
use crate::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Fills defaults in a validated snapshot, producing a [`Snapshot`] safe to
/// hand directly to [`crate::store::CategoryStore::import_data`]:
///
/// - category: missing id → generated, missing `sortOrder` (or one this
///   build does not recognize) → alphabetical, missing timestamps → now
/// - item: missing id → generated, missing `description` → empty, missing
///   timestamps → now
pub fn normalize(data: &Value, clock: &impl Clock, ids: &mut impl IdGen) -> Snapshot {
    let now = clock.now();
    let categories = data
        .get("categories")
        .and_then(Value::as_array)
        .map(|raw| raw.iter().map(|c| normalize_category(c, now, ids)).collect())
        .unwrap_or_default();

    Snapshot {
        categories,
        last_backup: timestamp_field(data, "lastBackup"),
    }
}

fn normalize_category(raw: &Value, now: DateTime<Utc>, ids: &mut impl IdGen) -> Category {
    let items = raw
        .get("items")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().map(|i| normalize_item(i, now, ids)).collect())
        .unwrap_or_default();

    Category {
        id: string_field(raw, "id").unwrap_or_else(|| ids.next_id()),
        name: string_field(raw, "name").unwrap_or_default(),
        items,
        sort_order: string_field(raw, "sortOrder")
            .and_then(|s| s.parse::<SortOrder>().ok())
            .unwrap_or_default(),
        created_at: timestamp_field(raw, "createdAt").unwrap_or(now),
        updated_at: timestamp_field(raw, "updatedAt").unwrap_or(now),
    }
}

fn normalize_item(raw: &Value, now: DateTime<Utc>, ids: &mut impl IdGen) -> Item {
    let tags = raw
        .get("tags")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().map(tag_text).collect())
        .unwrap_or_default();

    Item {
        id: string_field(raw, "id").unwrap_or_else(|| ids.next_id()),
        name: string_field(raw, "name").unwrap_or_default(),
        description: string_field(raw, "description").unwrap_or_default(),
        tags,
        created_at: timestamp_field(raw, "createdAt").unwrap_or(now),
        updated_at: timestamp_field(raw, "updatedAt").unwrap_or(now),
    }
}

// Tag entries are expected to be strings; anything else is carried over as
// its JSON text rather than dropped.
fn tag_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn timestamp_field(raw: &Value, key: &str) -> Option<DateTime<Utc>> {
    raw.get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<DateTime<Utc>>().ok())
}
