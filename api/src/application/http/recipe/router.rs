use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::generate_content::{__path_generate_content, generate_content};
use super::handlers::generate_content_from_photo::{
    __path_generate_content_from_photo, MAX_IMAGE_SIZE, generate_content_from_photo,
};
use crate::application::http::server::app_state::AppState;

/// Room for a maximum size image once base64 encoded plus the text fields.
const MAX_GENERATE_BODY_SIZE: usize = MAX_IMAGE_SIZE * 4 / 3 + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(generate_content, generate_content_from_photo))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate", state.args.server.root_path),
            post(generate_content),
        )
        .route(
            &format!("{}/generate/photo", state.args.server.root_path),
            post(generate_content_from_photo),
        )
        .layer(DefaultBodyLimit::max(MAX_GENERATE_BODY_SIZE))
}
