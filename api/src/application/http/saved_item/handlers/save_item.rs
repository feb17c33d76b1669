use axum::extract::State;
use leftover_chef_core::domain::saved_item::SaveItemInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    saved_item::validators::SaveItemValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const ALREADY_SAVED_MESSAGE: &str = "This content is already in your saved list.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveItemResponse {
    pub saved: bool,
    pub title: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "saved-item",
    summary = "Save item",
    description = "Saves a recipe or preservation plan unless the same title and content are already saved.",
    responses(
        (status = 201, body = SaveItemResponse),
        (status = 200, description = "Already saved", body = SaveItemResponse)
    ),
    request_body = SaveItemValidator
)]
pub async fn save_item(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveItemValidator>,
) -> Result<Response<SaveItemResponse>, ApiError> {
    let input = SaveItemInput {
        content: payload.content,
        item_type: payload.item_type,
    };

    let outcome = state
        .with_saved_items(move |store| store.append(input))
        .await?
        .map_err(ApiError::from)?;

    if !outcome.saved {
        return Ok(Response::OK(SaveItemResponse {
            saved: false,
            title: outcome.title,
            message: ALREADY_SAVED_MESSAGE.to_string(),
        }));
    }

    Ok(Response::Created(SaveItemResponse {
        saved: true,
        message: format!("\"{}\" has been saved successfully.", outcome.title),
        title: outcome.title,
    }))
}
