use crate::domain::recipe::{entities::PlanChoice, value_objects::GenerateContentInput};

const PREAMBLE: &str = "You are an inventive home chef and an expert in keeping food fresh. \
Work only from the ingredients the user has on hand. When a photo is attached, identify \
the ingredients it shows and treat them as the main ingredients.";

const RECIPE_TASK: &str = "## Recipe
Write one recipe that uses the user's ingredients.
- Use the user's ingredients as the main ingredients.
- You may add at most 3 common pantry staples (salt, pepper, oil, water and similar).
- Do not introduce any other ingredient.
- Format the recipe as Markdown:
  - the recipe name as a level 2 heading (##);
  - a short, appetising one-paragraph description;
  - \"Ingredients\" and \"Instructions\" as level 3 headings (###);
  - ingredients as a bullet list (*);
  - instructions as a numbered list (1., 2., 3.);
  - the estimated prep time and cook time.
- Estimate calories, fat, protein and sugar per serving.
- Add one sentence saying whether the dish suits weight loss, weight gain or maintenance.
- Fill `recipe.content`, `recipe.nutrition` and `recipe.healthAnalysis`.";

const PRESERVATION_TASK: &str = "## Preservation plan
Explain how to keep the user's ingredients safe to eat for as long as possible.
- Pick the best method for each ingredient (refrigerating, freezing, pickling, drying...).
- Give short step-by-step instructions for every method.
- Say how and where to store the result.
- Estimate how long the food stays safe to eat (e.g. \"3-5 days\", \"up to 6 months\").
- Format the plan as Markdown:
  - a level 2 heading (##) title such as \"## Preservation Plan for Your Ingredients\";
  - a level 3 heading (###) per ingredient or method;
  - numbered lists for instructions.
- Fill `preservation.content` and `preservation.preservationDays`.";

/// Builds the prompt for the requested plan. Sections for text ingredients,
/// the photo and allergies only appear when the input carries them.
pub fn build_prompt(input: &GenerateContentInput, plan_choice: PlanChoice) -> String {
    let mut sections = vec![PREAMBLE.to_string()];

    if let Some(ingredients) = input.ingredients() {
        sections.push(format!("Ingredients described by the user: {ingredients}"));
    }

    if input.photo.is_some() {
        sections.push("A photo of the ingredients is attached.".to_string());
    }

    if let Some(allergies) = input.allergies() {
        sections.push(format!(
            "ALLERGY ALERT: the user is allergic to: {allergies}. \
Never include these ingredients or anything derived from them."
        ));
    }

    sections.push("---".to_string());

    if plan_choice.includes_recipe() {
        sections.push(RECIPE_TASK.to_string());
    }

    if plan_choice.includes_preservation() {
        sections.push(PRESERVATION_TASK.to_string());
    }

    sections.push(match plan_choice {
        PlanChoice::Recipe => "Generate the recipe only.".to_string(),
        PlanChoice::Preservation => "Generate the preservation plan only.".to_string(),
        PlanChoice::Both => "Generate both the recipe and the preservation plan.".to_string(),
    });

    sections.join("\n\n")
}
