use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display-ordering mode for a category's items.
///
/// The wire spelling is camelCase (`"alphabetical"`, `"dateAdded"`,
/// `"dateModified"`); unrecognized wire values fall back to `Alphabetical`
/// at the normalization boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    DateAdded,
    DateModified,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabetical" => Ok(SortOrder::Alphabetical),
            "dateAdded" => Ok(SortOrder::DateAdded),
            "dateModified" => Ok(SortOrder::DateModified),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Alphabetical => write!(f, "alphabetical"),
            SortOrder::DateAdded => write!(f, "dateAdded"),
            SortOrder::DateModified => write!(f, "dateModified"),
        }
    }
}

/// A single note.
///
/// The id is opaque and immutable after creation; `created_at` is set once
/// and `updated_at` is refreshed on every mutation of the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: String, draft: ItemDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The caller-editable fields of an item, as entered in a form or on the
/// command line. Identity and timestamps are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// A named, ordered collection of items with its own sort preference.
///
/// Insertion order of `items` is the canonical storage order; sorting for
/// display is derived per query and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
    #[serde(default)]
    pub sort_order: SortOrder,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: String, name: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
            sort_order: SortOrder::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_wire_spelling_is_camel_case() {
        let json = serde_json::to_string(&SortOrder::DateAdded).unwrap();
        assert_eq!(json, "\"dateAdded\"");

        let parsed: SortOrder = serde_json::from_str("\"dateModified\"").unwrap();
        assert_eq!(parsed, SortOrder::DateModified);
    }

    #[test]
    fn sort_order_parses_known_values_only() {
        assert_eq!(
            "alphabetical".parse::<SortOrder>().unwrap(),
            SortOrder::Alphabetical
        );
        assert!("byColor".parse::<SortOrder>().is_err());
    }

    #[test]
    fn item_fields_serialize_as_camel_case() {
        let now = Utc::now();
        let item = Item::new("id-1".into(), ItemDraft::new("Tea"), now);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["name"], "Tea");
    }

    #[test]
    fn new_item_trims_its_name() {
        let item = Item::new("id-1".into(), ItemDraft::new("  Tea  "), Utc::now());
        assert_eq!(item.name, "Tea");
    }
}
