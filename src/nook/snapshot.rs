//! The exchange format: the full serialized representation of the store,
//! used for export, import, and durable persistence.

use crate::env::{Clock, IdGen};
use crate::error::Result;
use crate::model::Category;
use crate::normalize::normalize;
use crate::validate::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A full-store snapshot. `last_backup` is stamped on export and carried
/// through import when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_backup: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Parses untrusted snapshot text through the full import pipeline:
    /// parse, validate, normalize. The result is safe to hand to
    /// [`crate::store::CategoryStore::import_data`].
    pub fn from_json(text: &str, clock: &impl Clock, ids: &mut impl IdGen) -> Result<Snapshot> {
        let data: Value = serde_json::from_str(text)?;
        validate(&data)?;
        Ok(normalize(&data, clock, ids))
    }

    /// Renders the snapshot as pretty-printed exchange-format JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Captures the store's categories for export, stamping `last_backup` with
/// the export instant. The delivered text is opaque to the share mechanism.
pub fn to_export_snapshot(categories: &[Category], now: DateTime<Utc>) -> Snapshot {
    Snapshot {
        categories: categories.to_vec(),
        last_backup: Some(now),
    }
}
