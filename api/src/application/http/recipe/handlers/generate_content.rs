use axum::extract::State;
use leftover_chef_core::domain::{
    markdown::render,
    recipe::{
        GenerateContentInput, GeneratedContent, GenerationService, HealthGoal, Photo,
        PreservationPlan,
    },
    saved_item::{SaveItemInput, SaveOutcome, SavedItemType},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateContentValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthBadge {
    pub goal: HealthGoal,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateContentResponse {
    pub data: GeneratedContent,
    pub recipe_html: Option<String>,
    pub preservation_html: Option<String>,
    pub health: Option<HealthBadge>,
    /// Set when the preservation plan was saved automatically.
    pub auto_saved: Option<SaveOutcome>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Generate a recipe and/or preservation plan",
    description = "Generates content from typed ingredients or a data URI photo. A returned preservation plan is saved automatically.",
    responses(
        (status = 200, body = GenerateContentResponse),
        (status = 400, description = "Missing ingredients or plan choice"),
        (status = 502, description = "Generation failed")
    ),
    request_body = GenerateContentValidator
)]
pub async fn generate_content(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateContentValidator>,
) -> Result<Response<GenerateContentResponse>, ApiError> {
    let photo = match payload.photo_data_uri.as_deref().map(str::trim) {
        Some(uri) if !uri.is_empty() => Some(Photo::from_data_uri(uri)?),
        _ => None,
    };

    let input = GenerateContentInput {
        ingredients_text: payload.ingredients,
        allergy_list: payload.allergies,
        photo,
        plan_choice: payload.plan_choice,
    };

    generate(&state, input).await
}

/// Runs generation and shapes the response shared by the JSON and multipart
/// routes.
pub async fn generate(
    state: &AppState,
    input: GenerateContentInput,
) -> Result<Response<GenerateContentResponse>, ApiError> {
    let content = state
        .service
        .generate_content(input)
        .await
        .map_err(ApiError::from)?;

    let auto_saved = match &content.preservation {
        Some(plan) if state.args.server.auto_save_preservation => auto_save(state, plan).await,
        _ => None,
    };

    let health = content.recipe.as_ref().map(|recipe| {
        let goal = recipe.health_goal();
        HealthBadge {
            goal,
            label: goal.label().to_string(),
        }
    });

    Ok(Response::OK(GenerateContentResponse {
        recipe_html: content.recipe.as_ref().map(|r| render(&r.content)),
        preservation_html: content.preservation.as_ref().map(|p| render(&p.content)),
        health,
        auto_saved,
        data: content,
    }))
}

/// A failed auto-save is logged and does not fail the request.
async fn auto_save(state: &AppState, plan: &PreservationPlan) -> Option<SaveOutcome> {
    let input = SaveItemInput {
        content: plan.content.clone(),
        item_type: SavedItemType::Preservation,
    };

    match state.with_saved_items(move |store| store.append(input)).await {
        Ok(Ok(outcome)) => {
            info!(title = %outcome.title, saved = outcome.saved, "Auto-saved preservation plan");
            Some(outcome)
        }
        Ok(Err(e)) => {
            error!("Failed to auto-save preservation plan: {}", e);
            None
        }
        Err(e) => {
            error!("Failed to auto-save preservation plan: {}", e);
            None
        }
    }
}
