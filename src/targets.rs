use crate::models::{Gender, Goal, Lifestyle, Profile};

/// Maintenance calories per kilogram of body weight.
pub const CAL_PER_KG_MALE: f64 = 24.0;
pub const CAL_PER_KG_OTHER: f64 = 22.0;

/// Goal adjustments applied to maintenance.
pub const LOSE_FAT_DEFICIT: f64 = 500.0;
pub const BUILD_MUSCLE_SURPLUS: f64 = 300.0;

/// Hard ceiling on the daily target.
pub const MAX_DAILY_TARGET: u32 = 2800;

fn lifestyle_multiplier(lifestyle: Lifestyle) -> f64 {
    match lifestyle {
        Lifestyle::Sedentary => 1.2,
        Lifestyle::LightlyActive => 1.375,
        Lifestyle::Active => 1.55,
        Lifestyle::Athlete => 1.725,
    }
}

/// Maintenance calories: per-kg base scaled by the lifestyle multiplier.
pub fn maintenance_calories(profile: &Profile) -> f64 {
    let per_kg = match profile.gender {
        Gender::Male => CAL_PER_KG_MALE,
        Gender::Female | Gender::Other => CAL_PER_KG_OTHER,
    };
    per_kg * profile.weight_kg * lifestyle_multiplier(profile.lifestyle)
}

/// Daily calorie target: maintenance adjusted by goal, capped.
pub fn daily_target(profile: &Profile) -> u32 {
    let maintenance = maintenance_calories(profile);
    let adjusted = match profile.goal {
        Goal::LoseFat => maintenance - LOSE_FAT_DEFICIT,
        Goal::Maintain => maintenance,
        Goal::BuildMuscle => maintenance + BUILD_MUSCLE_SURPLUS,
    };
    (adjusted.max(0.0).round() as u32).min(MAX_DAILY_TARGET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietType;
    use assert_float_eq::assert_float_absolute_eq;

    fn profile(gender: Gender, weight_kg: f64, lifestyle: Lifestyle, goal: Goal) -> Profile {
        Profile {
            name: "Test".to_string(),
            gender,
            weight_kg,
            lifestyle,
            goal,
            allergies: Vec::new(),
            diet_type: DietType::Standard,
            dislikes: Vec::new(),
        }
    }

    #[test]
    fn test_maintenance_male_active() {
        let p = profile(Gender::Male, 70.0, Lifestyle::Active, Goal::Maintain);
        assert_float_absolute_eq!(maintenance_calories(&p), 24.0 * 70.0 * 1.55, 0.01);
    }

    #[test]
    fn test_maintenance_female_sedentary() {
        let p = profile(Gender::Female, 60.0, Lifestyle::Sedentary, Goal::Maintain);
        assert_float_absolute_eq!(maintenance_calories(&p), 22.0 * 60.0 * 1.2, 0.01);
    }

    #[test]
    fn test_lose_fat_deficit() {
        let p = profile(Gender::Female, 60.0, Lifestyle::Sedentary, Goal::LoseFat);
        assert_eq!(daily_target(&p), (22.0_f64 * 60.0 * 1.2 - 500.0).round() as u32);
    }

    #[test]
    fn test_build_muscle_hits_cap() {
        // 24 * 70 * 1.55 + 300 = 2904.6, above the ceiling.
        let p = profile(Gender::Male, 70.0, Lifestyle::Active, Goal::BuildMuscle);
        assert_eq!(daily_target(&p), MAX_DAILY_TARGET);
    }

    #[test]
    fn test_lightest_profile_stays_positive() {
        // 22 * 30 * 1.2 = 792; the deficit still leaves a positive target.
        let p = profile(Gender::Female, 30.0, Lifestyle::Sedentary, Goal::LoseFat);
        assert_eq!(daily_target(&p), 292);
    }
}
