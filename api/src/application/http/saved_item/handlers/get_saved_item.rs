use axum::extract::{Path, State};
use leftover_chef_core::domain::{markdown::render, saved_item::SavedItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSavedItemResponse {
    pub data: SavedItem,
    pub html: String,
}

#[utoipa::path(
    get,
    path = "/{title}",
    tag = "saved-item",
    summary = "Get saved item",
    description = "Returns the newest saved item with the given title and its rendered HTML.",
    params(
        ("title" = String, Path, description = "Item title"),
    ),
    responses(
        (status = 200, body = GetSavedItemResponse),
        (status = 404, description = "No item with this title")
    ),
)]
pub async fn get_saved_item(
    Path(title): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetSavedItemResponse>, ApiError> {
    let lookup = title.clone();
    let item = state
        .with_saved_items(move |store| store.get(&lookup))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No saved item titled \"{}\"", title)))?;

    let html = render(&item.content);

    Ok(Response::OK(GetSavedItemResponse { data: item, html }))
}
