use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::saved_item::entities::SavedItemType;

#[derive(Debug, Clone)]
pub struct SaveItemInput {
    pub content: String,
    pub item_type: SavedItemType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SaveOutcome {
    pub saved: bool,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct SavedItemFilter {
    pub search: Option<String>,
    pub item_type: Option<SavedItemType>,
}

impl SavedItemFilter {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            item_type: None,
        }
    }
}
