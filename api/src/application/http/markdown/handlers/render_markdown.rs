use leftover_chef_core::domain::markdown::render;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    markdown::validators::RenderMarkdownValidator,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RenderMarkdownResponse {
    pub html: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "markdown",
    summary = "Render markdown",
    description = "Renders the markdown subset used by generated recipes and plans to HTML.",
    responses(
        (status = 200, body = RenderMarkdownResponse)
    ),
    request_body = RenderMarkdownValidator
)]
pub async fn render_markdown(
    ValidateJson(payload): ValidateJson<RenderMarkdownValidator>,
) -> Result<Response<RenderMarkdownResponse>, ApiError> {
    Ok(Response::OK(RenderMarkdownResponse {
        html: render(&payload.markdown),
    }))
}
