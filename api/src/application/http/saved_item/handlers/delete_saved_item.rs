use axum::extract::{Path, State};
use leftover_chef_core::domain::{
    common::entities::app_errors::CoreError, saved_item::SavedItem,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, DELETE_FAILED_MESSAGE},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSavedItemResponse {
    pub message: String,
    pub data: Vec<SavedItem>,
}

fn delete_failure(error: CoreError) -> ApiError {
    match error {
        CoreError::PersistenceError(_) => {
            ApiError::InternalServerError(DELETE_FAILED_MESSAGE.to_string())
        }
        other => ApiError::from(other),
    }
}

#[utoipa::path(
    delete,
    path = "/{title}",
    tag = "saved-item",
    summary = "Delete saved items",
    description = "Deletes every saved item with the given title and returns the remaining items, newest first.",
    params(
        ("title" = String, Path, description = "Item title"),
    ),
    responses(
        (status = 200, body = DeleteSavedItemResponse),
        (status = 500, description = "Saved items could not be read or written")
    ),
)]
pub async fn delete_saved_item(
    Path(title): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSavedItemResponse>, ApiError> {
    let target = title.clone();
    let remaining = state
        .with_saved_items(move |store| store.remove(&target))
        .await?
        .map_err(delete_failure)?;

    Ok(Response::OK(DeleteSavedItemResponse {
        message: format!("\"{}\" has been deleted.", title),
        data: remaining,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_failure_reports_delete() {
        assert_eq!(
            delete_failure(CoreError::PersistenceError("read-only".to_string())),
            ApiError::InternalServerError(DELETE_FAILED_MESSAGE.to_string())
        );
        assert_eq!(
            delete_failure(CoreError::InvalidInput("bad".to_string())),
            ApiError::BadRequest("bad".to_string())
        );
    }
}
