use leftover_chef_core::domain::saved_item::SavedItemType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveItemValidator {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,

    #[serde(rename = "type")]
    pub item_type: SavedItemType,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SavedItemsQuery {
    /// Case-insensitive match against title and content.
    #[serde(default)]
    pub search: Option<String>,

    /// Items without a stored type count as recipes.
    #[serde(default, rename = "type")]
    pub item_type: Option<SavedItemType>,
}
