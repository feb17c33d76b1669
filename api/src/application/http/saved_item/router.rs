use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::delete_saved_item::{__path_delete_saved_item, delete_saved_item};
use super::handlers::get_saved_item::{__path_get_saved_item, get_saved_item};
use super::handlers::get_saved_items::{__path_get_saved_items, get_saved_items};
use super::handlers::save_item::{__path_save_item, save_item};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_saved_items, get_saved_item, save_item, delete_saved_item))]
pub struct SavedItemApiDoc;

pub fn saved_item_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/saved-items", state.args.server.root_path),
            get(get_saved_items),
        )
        .route(
            &format!("{}/saved-items", state.args.server.root_path),
            post(save_item),
        )
        .route(
            &format!("{}/saved-items/{{title}}", state.args.server.root_path),
            get(get_saved_item),
        )
        .route(
            &format!("{}/saved-items/{{title}}", state.args.server.root_path),
            delete(delete_saved_item),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::application::http::{
        saved_item::handlers::{
            delete_saved_item::DeleteSavedItemResponse,
            get_saved_item::GetSavedItemResponse,
            get_saved_items::GetSavedItemsResponse,
            save_item::{ALREADY_SAVED_MESSAGE, SaveItemResponse},
        },
        server::{
            api_entities::api_error::{
                ApiErrorResponse, DELETE_FAILED_MESSAGE, SAVE_FAILED_MESSAGE,
            },
            app_state::testing::test_state,
            http_server::router,
        },
    };

    fn server(dir: &std::path::Path) -> TestServer {
        TestServer::new(router(test_state(dir, &[])).unwrap()).unwrap()
    }

    async fn save(server: &TestServer, content: &str, item_type: &str) -> SaveItemResponse {
        server
            .post("/saved-items")
            .json(&json!({"content": content, "type": item_type}))
            .await
            .json::<SaveItemResponse>()
    }

    #[tokio::test]
    async fn test_save_then_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());

        let response = server
            .post("/saved-items")
            .json(&json!({"content": "## Lemon Rice\nZesty.", "type": "recipe"}))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(
            response.json::<SaveItemResponse>(),
            SaveItemResponse {
                saved: true,
                title: "Lemon Rice".to_string(),
                message: "\"Lemon Rice\" has been saved successfully.".to_string(),
            }
        );

        let response = server
            .post("/saved-items")
            .json(&json!({"content": "## Lemon Rice\nZesty.", "type": "recipe"}))
            .await;
        response.assert_status_ok();
        let duplicate = response.json::<SaveItemResponse>();
        assert!(!duplicate.saved);
        assert_eq!(duplicate.message, ALREADY_SAVED_MESSAGE);
    }

    #[tokio::test]
    async fn test_save_rejects_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());

        let response = server
            .post("/saved-items")
            .json(&json!({"content": "", "type": "recipe"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ApiErrorResponse>().code, "E_VALIDATION");
    }

    #[tokio::test]
    async fn test_list_filters_by_search_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());

        save(&server, "## Garlic Broccoli\nRoast it.", "recipe").await;
        save(&server, "## Broccoli Freezing\n1. Blanch", "preservation").await;
        save(&server, "## Tomato Soup\nSimmer.", "recipe").await;

        let all = server.get("/saved-items").await.json::<GetSavedItemsResponse>();
        let titles: Vec<&str> = all.data.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Tomato Soup", "Broccoli Freezing", "Garlic Broccoli"]);

        let broccoli_recipes = server
            .get("/saved-items")
            .add_query_param("search", "BROCCOLI")
            .add_query_param("type", "recipe")
            .await
            .json::<GetSavedItemsResponse>();
        assert_eq!(broccoli_recipes.data.len(), 1);
        assert_eq!(broccoli_recipes.data[0].title, "Garlic Broccoli");
    }

    #[tokio::test]
    async fn test_get_renders_item() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());

        save(&server, "## Lemon Rice\n* rice", "recipe").await;

        let response = server.get("/saved-items/Lemon%20Rice").await;
        response.assert_status_ok();

        let item = response.json::<GetSavedItemResponse>();
        assert_eq!(item.data.title, "Lemon Rice");
        assert_eq!(item.html, "<h2>Lemon Rice</h2><ul><li>rice</li></ul>");

        server
            .get("/saved-items/Missing")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_returns_remaining() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());

        save(&server, "## Lemon Rice\nv1", "recipe").await;
        save(&server, "## Lemon Rice\nv2", "recipe").await;
        save(&server, "## Tomato Soup\nSimmer.", "recipe").await;

        let response = server.delete("/saved-items/Lemon%20Rice").await;
        response.assert_status_ok();

        let remaining = response.json::<DeleteSavedItemResponse>();
        assert_eq!(remaining.data.len(), 1);
        assert_eq!(remaining.data[0].title, "Tomato Soup");

        let response = server.delete("/saved-items/Nothing").await;
        response.assert_status_ok();
        assert_eq!(response.json::<DeleteSavedItemResponse>().data.len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_collection_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(dir.path());
        let data_file = dir.path().join("savedContent.json");
        std::fs::write(&data_file, "{not json").unwrap();

        let response = server
            .post("/saved-items")
            .json(&json!({"content": "## Lemon Rice", "type": "recipe"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<ApiErrorResponse>().message,
            SAVE_FAILED_MESSAGE
        );

        let response = server.delete("/saved-items/Lemon%20Rice").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<ApiErrorResponse>().message,
            DELETE_FAILED_MESSAGE
        );

        assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "{not json");

        let listed = server.get("/saved-items").await.json::<GetSavedItemsResponse>();
        assert!(listed.data.is_empty());
    }
}
