use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Similarity needed for a fuzzy allergy/dislike hit against an ingredient.
pub const AVOID_MATCH_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifestyle {
    Sedentary,
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    Active,
    Athlete,
}

impl Lifestyle {
    pub const ALL: [Lifestyle; 4] = [
        Lifestyle::Sedentary,
        Lifestyle::LightlyActive,
        Lifestyle::Active,
        Lifestyle::Athlete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Lifestyle::Sedentary => "Sedentary",
            Lifestyle::LightlyActive => "Lightly Active",
            Lifestyle::Active => "Active",
            Lifestyle::Athlete => "Athlete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Lose fat")]
    LoseFat,
    #[serde(rename = "Maintain weight")]
    Maintain,
    #[serde(rename = "Build muscle")]
    BuildMuscle,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseFat, Goal::Maintain, Goal::BuildMuscle];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::LoseFat => "Lose fat",
            Goal::Maintain => "Maintain weight",
            Goal::BuildMuscle => "Build muscle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    Standard,
    Vegetarian,
    Vegan,
    Keto,
    #[serde(rename = "High Protein")]
    HighProtein,
}

impl DietType {
    pub const ALL: [DietType; 5] = [
        DietType::Standard,
        DietType::Vegetarian,
        DietType::Vegan,
        DietType::Keto,
        DietType::HighProtein,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Standard => "Standard",
            DietType::Vegetarian => "Vegetarian",
            DietType::Vegan => "Vegan",
            DietType::Keto => "Keto",
            DietType::HighProtein => "High Protein",
        }
    }
}

/// A stored user profile: the attributes the plan generator was briefed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub gender: Gender,

    #[serde(rename = "weight")]
    pub weight_kg: f64,

    pub lifestyle: Lifestyle,
    pub goal: Goal,

    #[serde(default)]
    pub allergies: Vec<String>,

    pub diet_type: DietType,

    #[serde(default)]
    pub dislikes: Vec<String>,
}

impl Profile {
    /// First allergy or dislike that matches an ingredient name, if any.
    ///
    /// Substring containment catches exact terms; jaro-winkler catches the
    /// misspellings users actually type into free-text fields.
    pub fn avoidance_match(&self, ingredient_name: &str) -> Option<&str> {
        let name = ingredient_name.to_lowercase();
        self.allergies
            .iter()
            .chain(self.dislikes.iter())
            .find(|term| {
                let term = term.to_lowercase();
                !term.is_empty()
                    && (name.contains(&term) || jaro_winkler(&name, &term) > AVOID_MATCH_THRESHOLD)
            })
            .map(|s| s.as_str())
    }
}
