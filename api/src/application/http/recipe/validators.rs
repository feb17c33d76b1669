use leftover_chef_core::domain::recipe::PlanChoice;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateContentValidator {
    #[serde(default)]
    #[validate(length(max = 5000, message = "ingredients must be at most 5000 characters"))]
    pub ingredients: Option<String>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "allergies must be at most 1000 characters"))]
    pub allergies: Option<String>,

    /// `data:image/...;base64,...`; an empty string means no photo.
    #[serde(default)]
    pub photo_data_uri: Option<String>,

    #[serde(default)]
    pub plan_choice: Option<PlanChoice>,
}
