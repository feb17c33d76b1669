use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanChoice {
    Recipe,
    Preservation,
    Both,
}

impl PlanChoice {
    pub fn includes_recipe(&self) -> bool {
        matches!(self, PlanChoice::Recipe | PlanChoice::Both)
    }

    pub fn includes_preservation(&self) -> bool {
        matches!(self, PlanChoice::Preservation | PlanChoice::Both)
    }
}

impl fmt::Display for PlanChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanChoice::Recipe => "recipe",
            PlanChoice::Preservation => "preservation",
            PlanChoice::Both => "both",
        };
        f.write_str(s)
    }
}

impl FromStr for PlanChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recipe" => Ok(PlanChoice::Recipe),
            "preservation" => Ok(PlanChoice::Preservation),
            "both" => Ok(PlanChoice::Both),
            other => Err(format!("unknown plan choice: {other}")),
        }
    }
}

/// Estimated values per serving, as free text from the model (e.g. "12g").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub calories: String,
    pub fat: String,
    pub protein: String,
    pub sugar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub content: String,
    pub nutrition: Nutrition,
    pub health_analysis: String,
}

impl Recipe {
    pub fn health_goal(&self) -> HealthGoal {
        HealthGoal::from_analysis(&self.health_analysis)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreservationPlan {
    pub content: String,
    pub preservation_days: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preservation: Option<PreservationPlan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    WeightLoss,
    WeightGain,
    Maintenance,
}

impl HealthGoal {
    /// Classifies the model's one-sentence analysis. "loss" wins over "gain"
    /// when both appear.
    pub fn from_analysis(analysis: &str) -> Self {
        let analysis = analysis.to_lowercase();
        if analysis.contains("loss") {
            HealthGoal::WeightLoss
        } else if analysis.contains("gain") {
            HealthGoal::WeightGain
        } else {
            HealthGoal::Maintenance
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthGoal::WeightLoss => "Weight Loss",
            HealthGoal::WeightGain => "Weight Gain",
            HealthGoal::Maintenance => "Maintenance",
        }
    }
}
