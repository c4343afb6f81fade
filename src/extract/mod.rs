pub mod ingredient;
pub mod lines;
pub mod units;

pub use ingredient::parse_ingredient_line;
pub use lines::{parse_calorie_total, parse_day_marker};
pub use units::{is_known_unit, normalize_unit};

use crate::models::{CalorieLedger, IngredientAggregate};

/// Everything one scan of a plan produces: the ingredient aggregate and the
/// per-day calorie ledger, both always present even when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanExtract {
    pub ingredients: IngredientAggregate,
    pub calories: CalorieLedger,
}

/// Run the extraction pass over a rendered meal plan.
///
/// A single bounded scan in document order. Day markers switch the current
/// day; "Total: N kcal" statements record against it (last write wins, and
/// statements before any day marker are discarded); every other line is
/// offered to the ingredient parser. Malformed lines are skipped — nothing
/// here can fail, and empty input yields empty containers.
pub fn extract_plan(text: &str) -> PlanExtract {
    let mut ingredients = IngredientAggregate::new();
    let mut calories = CalorieLedger::new();
    let mut current_day: Option<u32> = None;

    for line in text.lines() {
        if let Some(day) = lines::parse_day_marker(line) {
            current_day = Some(day);
            // A total stated on the day line itself still counts.
            if let Some(kcal) = lines::parse_calorie_total(line) {
                calories.record_total(day, kcal);
            }
            continue;
        }

        if let Some(kcal) = lines::parse_calorie_total(line) {
            if let Some(day) = current_day {
                calories.record_total(day, kcal);
            }
            continue;
        }

        for entry in ingredient::parse_ingredient_line(line) {
            ingredients.add(entry);
        }
    }

    PlanExtract {
        ingredients,
        calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_day_ledger() {
        let extract = extract_plan("Day 1\n  Total: 1800 kcal\nDay 2\n  Total: 2000 kcal");
        assert_eq!(extract.calories.get(1), Some(1800));
        assert_eq!(extract.calories.get(2), Some(2000));
        assert_eq!(extract.calories.len(), 2);
    }

    #[test]
    fn test_total_before_any_day_is_discarded() {
        let extract = extract_plan("Total: 1500 kcal\nDay 1\nTotal: 1800 kcal");
        assert_eq!(extract.calories.get(1), Some(1800));
        assert_eq!(extract.calories.len(), 1);
    }

    #[test]
    fn test_duplicate_totals_last_wins() {
        let extract = extract_plan("Day 1\nTotal: 1800 kcal\nTotal: 1900 kcal");
        assert_eq!(extract.calories.get(1), Some(1900));
    }

    #[test]
    fn test_skipped_days_not_filled() {
        let extract = extract_plan("Day 1\nTotal: 1800 kcal\nDay 4\nTotal: 2100 kcal");
        assert_eq!(extract.calories.get(2), None);
        assert_eq!(extract.calories.get(3), None);
        assert_eq!(extract.calories.len(), 2);
    }

    #[test]
    fn test_ingredients_aggregate_across_days() {
        let text = "\
Day 1
- Chicken breast (500g)
- 1 cup spinach
Total: 1800 kcal
Day 2
- Chicken breast (300g)
Total: 2000 kcal";
        let extract = extract_plan(text);

        let chicken = extract.ingredients.get("chicken breast").unwrap();
        assert_eq!(chicken.get("g"), Some(&800.0));

        let spinach = extract.ingredients.get("spinach").unwrap();
        assert_eq!(spinach.get("ml"), Some(&240.0));
    }

    #[test]
    fn test_noise_has_no_side_effects() {
        let text = "\
Here is your plan! Enjoy.
Day 1
Breakfast: oat bowl
- Drink plenty of water
Total: 1800 kcal
Remember to stretch.";
        let extract = extract_plan(text);
        assert!(extract.ingredients.is_empty());
        assert_eq!(extract.calories.get(1), Some(1800));
    }

    #[test]
    fn test_empty_input() {
        let extract = extract_plan("");
        assert!(extract.ingredients.is_empty());
        assert!(extract.calories.is_empty());
    }

    #[test]
    fn test_reparse_is_deterministic() {
        let text = "Day 1\n- Oats (50g)\n- 2 eggs\nTotal: 1800 kcal\nIngredients: milk, banana";
        assert_eq!(extract_plan(text), extract_plan(text));
    }
}
