use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub root_path: String,
    pub gemini_model: String,
    pub llm_configured: bool,
    pub saved_items_key: String,
    pub auto_save_preservation: bool,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get runtime configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        root_path: state.args.server.root_path.clone(),
        gemini_model: state.args.llm.gemini_model.clone(),
        llm_configured: !state.args.llm.gemini_api_key.is_empty(),
        saved_items_key: state.args.storage.saved_items_key.clone(),
        auto_save_preservation: state.args.server.auto_save_preservation,
    })
}
