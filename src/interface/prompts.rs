use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{DietType, Gender, Goal, Lifestyle, Profile};

/// Weight bounds accepted by the profile form (kg).
const WEIGHT_MIN: f64 = 30.0;
const WEIGHT_MAX: f64 = 200.0;

/// Prompt for the user's name (must be non-empty).
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new().with_prompt("Name").interact_text()?;

    let name = input.trim().to_string();
    if name.is_empty() {
        return Err(PlanError::InvalidInput("Name must not be empty".to_string()));
    }
    Ok(name)
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight (kg)")
        .default("70".to_string())
        .interact_text()?;

    let weight: f64 = input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if !(WEIGHT_MIN..=WEIGHT_MAX).contains(&weight) {
        return Err(PlanError::InvalidInput(format!(
            "Weight must be between {} and {} kg",
            WEIGHT_MIN, WEIGHT_MAX
        )));
    }

    Ok(weight)
}

/// Prompt for a comma-separated list; empty input means none.
pub fn prompt_list(prompt: &str) -> Result<Vec<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    Ok(input
        .split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect())
}

fn select_index(prompt: &str, labels: &[&str]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the full profile form.
pub fn collect_profile() -> Result<Profile> {
    let name = prompt_name()?;

    let gender_labels: Vec<&str> = Gender::ALL.iter().map(Gender::label).collect();
    let gender = Gender::ALL[select_index("Gender", &gender_labels)?];

    let weight_kg = prompt_weight()?;

    let lifestyle_labels: Vec<&str> = Lifestyle::ALL.iter().map(Lifestyle::label).collect();
    let lifestyle = Lifestyle::ALL[select_index("Lifestyle", &lifestyle_labels)?];

    let goal_labels: Vec<&str> = Goal::ALL.iter().map(Goal::label).collect();
    let goal = Goal::ALL[select_index("Goal", &goal_labels)?];

    let allergies = prompt_list("Allergies (comma-separated, Enter for none)")?;

    let diet_labels: Vec<&str> = DietType::ALL.iter().map(DietType::label).collect();
    let diet_type = DietType::ALL[select_index("Diet type", &diet_labels)?];

    let dislikes = prompt_list("Dislikes or ingredients to avoid (comma-separated, Enter for none)")?;

    Ok(Profile {
        name,
        gender,
        weight_kg,
        lifestyle,
        goal,
        allergies,
        diet_type,
        dislikes,
    })
}
