use std::str::FromStr;

use axum::extract::{Multipart, State};
use leftover_chef_core::domain::recipe::{GenerateContentInput, Photo, PlanChoice};

use crate::application::http::{
    recipe::handlers::generate_content::{GenerateContentResponse, generate},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/photo",
    tag = "recipe",
    summary = "Generate from an uploaded photo",
    description = "Multipart form with an optional `image` file and the `ingredients`, `allergies` and `plan_choice` text fields.",
    responses(
        (status = 200, body = GenerateContentResponse),
        (status = 400, description = "Missing ingredients, plan choice or invalid image"),
        (status = 502, description = "Generation failed")
    ),
)]
pub async fn generate_content_from_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<GenerateContentResponse>, ApiError> {
    let mut input = GenerateContentInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field.content_type().unwrap_or("image/jpeg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.is_empty() {
                    continue;
                }

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                if !mime_type.starts_with("image/") {
                    return Err(ApiError::BadRequest(format!(
                        "Photo must be an image, got {:?}",
                        mime_type
                    )));
                }

                input.photo = Some(Photo {
                    mime_type,
                    data: data.to_vec(),
                });
            }
            "ingredients" | "allergies" | "plan_choice" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read {}: {}", name, e))
                })?;

                match name.as_str() {
                    "ingredients" => input.ingredients_text = Some(value),
                    "allergies" => input.allergy_list = Some(value),
                    _ if value.trim().is_empty() => {}
                    _ => {
                        input.plan_choice =
                            Some(PlanChoice::from_str(&value).map_err(ApiError::BadRequest)?)
                    }
                }
            }
            _ => {}
        }
    }

    generate(&state, input).await
}
