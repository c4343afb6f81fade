use crate::models::CalorieLedger;
use crate::pricing::{format_shopping_list, CostedPlan};

/// Display the per-day calorie ledger, with the profile target when known.
pub fn display_calorie_ledger(ledger: &CalorieLedger, target: Option<u32>) {
    if ledger.is_empty() {
        println!("No calorie totals found in the plan.");
        return;
    }

    println!();
    println!("=== Calories Per Day ===");
    println!();

    for (day, kcal) in ledger.iter() {
        match target {
            Some(target) => {
                let delta = kcal as i64 - target as i64;
                let sign = if delta >= 0 { "+" } else { "" };
                println!("Day {}: {} kcal (target {}, {}{})", day, kcal, target, sign, delta);
            }
            None => println!("Day {}: {} kcal", day, kcal),
        }
    }

    println!();
}

/// Display the priced shopping list with its summary block.
pub fn display_shopping_list(costed: &CostedPlan) {
    if costed.items.is_empty() {
        println!("No ingredients found. No shopping list available.");
        return;
    }

    println!();
    println!("=== Weekly Shopping List ===");
    println!();

    for line in format_shopping_list(&costed.items) {
        println!("{line}");
    }

    println!();
    println!("--- Summary ---");
    println!("Items: {}", costed.items.len());
    println!("Estimated total cost: ~£{:.2}", costed.total_cost);

    if costed.items.iter().any(|i| i.estimated) {
        println!("Lines marked * use the fallback price (no catalog match).");
    }

    if !costed.pantry_used.is_empty() {
        println!("Pantry staples on hand: {}", costed.pantry_used.join(", "));
    }

    println!();
}

/// Display (item, matched term) avoidance warnings, if any.
pub fn display_avoidance_warnings(warnings: &[(String, String)]) {
    if warnings.is_empty() {
        return;
    }

    println!("--- Warnings ---");
    for (item, term) in warnings {
        println!("{} matches listed avoidance '{}'", item, term);
    }
    println!();
}
