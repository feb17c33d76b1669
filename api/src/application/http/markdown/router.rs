use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::render_markdown::{__path_render_markdown, render_markdown};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(render_markdown))]
pub struct MarkdownApiDoc;

pub fn markdown_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/render", state.args.server.root_path),
        post(render_markdown),
    )
}
