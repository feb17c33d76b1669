use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RenderMarkdownValidator {
    #[serde(default)]
    pub markdown: String,
}
