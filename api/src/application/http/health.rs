use axum::{Router, extract::State, routing::get};
use leftover_chef_core::domain::saved_item::SavedItemFilter;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub saved_items: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let saved_items = state
        .with_saved_items(|store| store.list(&SavedItemFilter::default()).len())
        .await?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        saved_items,
    }))
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(health_check),
    )
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use super::*;
    use crate::application::http::server::{
        app_state::testing::test_state, http_server::router,
    };

    #[tokio::test]
    async fn test_health_reports_saved_item_count() {
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(router(test_state(dir.path(), &[])).unwrap()).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<HealthResponse>(),
            HealthResponse {
                status: "ok".to_string(),
                saved_items: 0,
            }
        );
    }
}
