use meal_ledger_rs::extract::extract_plan;

const SAMPLE_PLAN: &str = "\
Here is your 3-day plan! Keep meals simple and affordable.

📅 Day 1
Breakfast: overnight oats
- Oats (50g)
- 1 cup milk
- 1 handful berries
Lunch: chicken salad
- Chicken breast (250g)
- 2 cups spinach
**Total: 1850 kcal**

## Day 2
Dinner: salmon bowl
- Salmon fillet with lemon (250g)
- Brown rice (150g)
Ingredients: olive oil, soy sauce, sesame seeds (10g)
Total: 2000 kcal

Day 3
- 2 eggs
- Ensure variety across the week
Total: 1700 kcal
";

#[test]
fn test_ledger_from_sample_plan() {
    let extract = extract_plan(SAMPLE_PLAN);

    assert_eq!(extract.calories.get(1), Some(1850));
    assert_eq!(extract.calories.get(2), Some(2000));
    assert_eq!(extract.calories.get(3), Some(1700));
    assert_eq!(extract.calories.len(), 3);
}

#[test]
fn test_aggregate_from_sample_plan() {
    let extract = extract_plan(SAMPLE_PLAN);
    let agg = &extract.ingredients;

    assert_eq!(agg.get("oats").unwrap().get("g"), Some(&50.0));
    assert_eq!(agg.get("milk").unwrap().get("ml"), Some(&240.0));
    assert_eq!(agg.get("berries").unwrap().get("g"), Some(&30.0));
    assert_eq!(agg.get("chicken breast").unwrap().get("g"), Some(&250.0));
    assert_eq!(agg.get("spinach").unwrap().get("ml"), Some(&480.0));

    // Preparation note cut from the name.
    assert_eq!(agg.get("salmon fillet").unwrap().get("g"), Some(&250.0));

    // Inline list entries.
    assert_eq!(agg.get("olive oil").unwrap().get(""), Some(&1.0));
    assert_eq!(agg.get("soy sauce").unwrap().get(""), Some(&1.0));
    assert_eq!(agg.get("sesame seeds").unwrap().get("g"), Some(&10.0));

    // Count-style entry.
    assert_eq!(agg.get("eggs").unwrap().get("unit"), Some(&2.0));

    // Prose bullet contributed nothing.
    assert!(agg.get("ensure variety across the week").is_none());
}

#[test]
fn test_reparse_identical() {
    assert_eq!(extract_plan(SAMPLE_PLAN), extract_plan(SAMPLE_PLAN));
}

#[test]
fn test_ingredient_order_does_not_matter() {
    let forward = "\
Day 1
- Oats (50g)
- Chicken breast (250g)
- Oats (30g)
Total: 1800 kcal";
    let shuffled = "\
Day 1
- Oats (30g)
- Oats (50g)
- Chicken breast (250g)
Total: 1800 kcal";

    let a = extract_plan(forward);
    let b = extract_plan(shuffled);
    assert_eq!(a.ingredients, b.ingredients);
    assert_eq!(a.calories, b.calories);
}

#[test]
fn test_empty_and_noise_only_input() {
    let empty = extract_plan("");
    assert!(empty.ingredients.is_empty());
    assert!(empty.calories.is_empty());

    let noise = extract_plan("Enjoy your week!\nStay hydrated.\nBest wishes.");
    assert!(noise.ingredients.is_empty());
    assert!(noise.calories.is_empty());
}

#[test]
fn test_calories_without_day_context_are_dropped() {
    let extract = extract_plan("Total: 9000 kcal\nSome prose.\n- Oats (40g)");
    assert!(extract.calories.is_empty());
    assert_eq!(extract.ingredients.get("oats").unwrap().get("g"), Some(&40.0));
}
