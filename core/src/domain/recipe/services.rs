use tracing::{error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::GeneratedContent,
        ports::{GenerationService, LLMClient},
        prompt::build_prompt,
        schema::get_generation_schema,
        value_objects::GenerateContentInput,
    },
};

pub const MISSING_INGREDIENTS_MESSAGE: &str = "Please enter some ingredients or upload a photo.";
pub const MISSING_PLAN_CHOICE_MESSAGE: &str =
    "Please choose whether you want a recipe or a preservation plan.";

impl<LLM> GenerationService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_content(
        &self,
        input: GenerateContentInput,
    ) -> Result<GeneratedContent, CoreError> {
        // 1. Validate input
        if input.ingredients().is_none() && input.photo.is_none() {
            return Err(CoreError::InvalidInput(
                MISSING_INGREDIENTS_MESSAGE.to_string(),
            ));
        }

        let plan_choice = input.plan_choice.ok_or_else(|| {
            CoreError::InvalidInput(MISSING_PLAN_CHOICE_MESSAGE.to_string())
        })?;

        // 2. Build prompt and response schema
        let prompt = build_prompt(&input, plan_choice);
        let response_schema = get_generation_schema(plan_choice);

        info!(
            plan_choice = %plan_choice,
            has_photo = input.photo.is_some(),
            has_allergies = input.allergies().is_some(),
            "Generating content"
        );

        // 3. Call LLM
        let raw_response = match input.photo {
            Some(photo) => {
                self.llm_client
                    .generate_with_image(prompt, photo.data, photo.mime_type, response_schema)
                    .await?
            }
            None => {
                self.llm_client
                    .generate_with_text(prompt, response_schema)
                    .await?
            }
        };

        // 4. Parse and validate response
        let content: GeneratedContent = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        if plan_choice.includes_recipe() && content.recipe.is_none() {
            error!("LLM response is missing the recipe");
            return Err(CoreError::ExternalServiceError(
                "No recipe field in response".to_string(),
            ));
        }

        if plan_choice.includes_preservation() && content.preservation.is_none() {
            error!("LLM response is missing the preservation plan");
            return Err(CoreError::ExternalServiceError(
                "No preservation field in response".to_string(),
            ));
        }

        Ok(content)
    }
}
