use crate::models::{IngredientAggregate, PriceCatalog};
use crate::pricing::categories::{categorize, Category};

/// Unit price applied when an ingredient misses the catalog.
pub const DEFAULT_FALLBACK_PRICE: f64 = 2.50;

/// Ingredient-name substrings recognized as pantry staples: commonly
/// stocked, excluded from costing and from the priced list.
pub const PANTRY_STAPLES: &[&str] = &[
    "olive oil",
    "salt",
    "pepper",
    "vinegar",
    "lemon juice",
    "spices",
    "soy sauce",
];

/// Whether a name contains any pantry-staple substring.
pub fn is_pantry_staple(name: &str) -> bool {
    let name = name.to_lowercase();
    PANTRY_STAPLES.iter().any(|staple| name.contains(staple))
}

/// One priced line of the shopping list.
#[derive(Debug, Clone)]
pub struct PricedShoppingItem {
    pub category: Category,
    pub display_name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
    pub line_cost: f64,
    pub url: Option<String>,
    pub estimated: bool,
}

/// Result of one costing run over an aggregate.
#[derive(Debug, Clone, Default)]
pub struct CostedPlan {
    pub items: Vec<PricedShoppingItem>,
    pub total_cost: f64,
    /// Pantry-staple names seen in the plan (recognized, never priced).
    pub pantry_used: Vec<String>,
}

/// Prices an ingredient aggregate against an injected read-only catalog.
///
/// Costing policy is raw multiply: `line_cost = unit_price × quantity` per
/// (name, unit) bucket, so an ingredient split across units contributes one
/// line per unit. Catalog prices are typically per pack or per kg, so gram
/// quantities inflate totals — a documented tradeoff of the heuristic, not
/// something the engine corrects.
pub struct CostingEngine {
    catalog: PriceCatalog,
    fallback_price: f64,
}

impl CostingEngine {
    pub fn new(catalog: PriceCatalog) -> Self {
        Self {
            catalog,
            fallback_price: DEFAULT_FALLBACK_PRICE,
        }
    }

    pub fn with_fallback_price(mut self, price: f64) -> Self {
        self.fallback_price = price;
        self
    }

    /// Price every non-pantry aggregate entry; never fails.
    pub fn price(&self, aggregate: &IngredientAggregate) -> CostedPlan {
        let mut items = Vec::new();
        let mut total_cost = 0.0;
        let mut pantry_used = Vec::new();

        for (name, units) in aggregate.iter() {
            if is_pantry_staple(name) {
                pantry_used.push(name.clone());
                continue;
            }

            let hit = self.catalog.resolve(name);
            let category = categorize(name);

            for (unit, quantity) in units {
                // One malformed quantity must not abort the whole run.
                let quantity = if quantity.is_finite() { *quantity } else { 1.0 };

                let (unit_price, url, estimated, display_unit) = match hit {
                    Some(entry) => {
                        // Adopt the catalog's unit for display when the
                        // parsed one is empty.
                        let display_unit = if unit.is_empty() && !entry.unit.is_empty() {
                            entry.unit.clone()
                        } else {
                            unit.clone()
                        };
                        (entry.price, entry.url.clone(), false, display_unit)
                    }
                    None => (self.fallback_price, None, true, unit.clone()),
                };

                let line_cost = unit_price * quantity;
                total_cost += line_cost;

                items.push(PricedShoppingItem {
                    category,
                    display_name: title_case(name),
                    quantity,
                    unit: display_unit,
                    unit_price,
                    line_cost,
                    url,
                    estimated,
                });
            }
        }

        CostedPlan {
            items,
            total_cost,
            pantry_used,
        }
    }
}

/// "chicken breast" → "Chicken Breast".
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
