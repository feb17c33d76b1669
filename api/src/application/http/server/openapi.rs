use utoipa::OpenApi;

use crate::application::http::{
    health::__path_health_check, markdown::router::MarkdownApiDoc,
    recipe::router::RecipeApiDoc, saved_item::router::SavedItemApiDoc,
    server::config::__path_get_config,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leftover Chef API"
    ),
    paths(health_check, get_config),
    nest(
        (path = "/generate", api = RecipeApiDoc),
        (path = "/render", api = MarkdownApiDoc),
        (path = "/saved-items", api = SavedItemApiDoc),
    )
)]
pub struct ApiDoc;
