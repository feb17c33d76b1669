use serde_json::json;

use crate::domain::recipe::entities::PlanChoice;

fn recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "content": { "type": "string", "description": "The recipe in Markdown." },
            "nutrition": {
                "type": "object",
                "properties": {
                    "calories": { "type": "string" },
                    "fat": { "type": "string" },
                    "protein": { "type": "string" },
                    "sugar": { "type": "string" }
                },
                "required": ["calories", "fat", "protein", "sugar"]
            },
            "healthAnalysis": { "type": "string" }
        },
        "required": ["content", "nutrition", "healthAnalysis"]
    })
}

fn preservation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "content": { "type": "string", "description": "The preservation plan in Markdown." },
            "preservationDays": { "type": "string" }
        },
        "required": ["content", "preservationDays"]
    })
}

/// Returns the JSON schema for generation responses, limited to the
/// requested plan(s).
pub fn get_generation_schema(plan_choice: PlanChoice) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    if plan_choice.includes_recipe() {
        properties.insert("recipe".to_string(), recipe_schema());
        required.push("recipe");
    }

    if plan_choice.includes_preservation() {
        properties.insert("preservation".to_string(), preservation_schema());
        required.push("preservation");
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_for_single_plan() {
        let schema = get_generation_schema(PlanChoice::Preservation);
        assert_eq!(schema["required"], json!(["preservation"]));
        assert!(schema["properties"].get("recipe").is_none());
    }

    #[test]
    fn test_schema_for_both() {
        let schema = get_generation_schema(PlanChoice::Both);
        assert_eq!(schema["required"], json!(["recipe", "preservation"]));
    }
}
