use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_timestamp, to_iso_string};

static TITLE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s*(.*)$").expect("title heading pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SavedItemType {
    Recipe,
    Preservation,
}

impl SavedItemType {
    pub fn default_title(&self) -> &'static str {
        match self {
            SavedItemType::Recipe => "Untitled",
            SavedItemType::Preservation => "Untitled Preservation Plan",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SavedItemType::Recipe => "recipe",
            SavedItemType::Preservation => "preservation",
        }
    }
}

impl fmt::Display for SavedItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SavedItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recipe" => Ok(SavedItemType::Recipe),
            "preservation" => Ok(SavedItemType::Preservation),
            other => Err(format!("unknown saved item type: {other}")),
        }
    }
}

/// A persisted recipe or preservation plan. The serialized shape
/// (`title`, `content`, `savedAt`, optional `type`) is the on-disk format.
///
/// Records are read leniently: `savedAt` is kept as the stored text and an
/// unrecognized `type` is carried through untouched, so rewriting the
/// collection never alters records this version does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "StoredItem", into = "StoredItem")]
pub struct SavedItem {
    pub title: String,
    pub content: String,
    /// ISO-8601 for items saved by this service; older records may hold
    /// any text.
    pub saved_at: String,
    #[serde(rename = "type")]
    pub item_type: Option<SavedItemType>,
    #[serde(skip)]
    unrecognized_type: Option<String>,
}

impl SavedItem {
    pub fn new(content: String, item_type: SavedItemType) -> Self {
        let title =
            derive_title(&content).unwrap_or_else(|| item_type.default_title().to_string());

        Self {
            title,
            content,
            saved_at: to_iso_string(&generate_timestamp()),
            item_type: Some(item_type),
            unrecognized_type: None,
        }
    }

    /// Kind used for filtering. Items written before kinds existed only ever
    /// held recipes; an unrecognized kind matches no filter.
    pub fn effective_type(&self) -> Option<SavedItemType> {
        match (&self.item_type, &self.unrecognized_type) {
            (Some(item_type), _) => Some(*item_type),
            (None, Some(_)) => None,
            (None, None) => Some(SavedItemType::Recipe),
        }
    }

    /// `savedAt` as a timestamp, `None` when the stored text is not RFC 3339.
    pub fn saved_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.saved_at)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc))
    }

    pub fn is_same_as(&self, title: &str, content: &str) -> bool {
        self.title == title && self.content == content
    }

    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// Text of the first `##` heading line, trimmed. Empty headings count as absent.
pub fn derive_title(content: &str) -> Option<String> {
    TITLE_HEADING
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    saved_at: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    item_type: Option<String>,
}

impl From<StoredItem> for SavedItem {
    fn from(stored: StoredItem) -> Self {
        let (item_type, unrecognized_type) = match stored.item_type.as_deref() {
            None => (None, None),
            Some("recipe") => (Some(SavedItemType::Recipe), None),
            Some("preservation") => (Some(SavedItemType::Preservation), None),
            Some(_) => (None, stored.item_type),
        };

        SavedItem {
            title: stored.title,
            content: stored.content,
            saved_at: stored.saved_at,
            item_type,
            unrecognized_type,
        }
    }
}

impl From<SavedItem> for StoredItem {
    fn from(item: SavedItem) -> Self {
        StoredItem {
            title: item.title,
            content: item.content,
            saved_at: item.saved_at,
            item_type: item
                .item_type
                .map(|item_type| item_type.as_str().to_string())
                .or(item.unrecognized_type),
        }
    }
}
