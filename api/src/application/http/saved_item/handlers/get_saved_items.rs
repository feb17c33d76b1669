use axum::extract::{Query, State};
use leftover_chef_core::domain::saved_item::{SavedItem, SavedItemFilter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    saved_item::validators::SavedItemsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSavedItemsResponse {
    pub data: Vec<SavedItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "saved-item",
    summary = "List saved items",
    description = "Lists saved recipes and preservation plans, newest first.",
    params(SavedItemsQuery),
    responses(
        (status = 200, body = GetSavedItemsResponse)
    ),
)]
pub async fn get_saved_items(
    State(state): State<AppState>,
    Query(query): Query<SavedItemsQuery>,
) -> Result<Response<GetSavedItemsResponse>, ApiError> {
    let filter = SavedItemFilter {
        search: query.search,
        item_type: query.item_type,
    };

    let items = state
        .with_saved_items(move |store| store.list(&filter))
        .await?;

    Ok(Response::OK(GetSavedItemsResponse { data: items }))
}
