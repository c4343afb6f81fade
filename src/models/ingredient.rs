use std::collections::BTreeMap;

/// A single parsed ingredient mention.
///
/// `name` is already lowercased and cleaned by the parser; `unit` is either
/// a canonical unit string or empty for plain counts.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientEntry {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

impl IngredientEntry {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
        }
    }
}

/// Running ingredient totals for a whole plan, keyed by name then unit.
///
/// The same name under different units forms distinct buckets ("rice"/"g"
/// and "rice"/"" never merge). Quantities only ever accumulate; callers
/// create a fresh aggregate per plan. BTreeMap keys give a fixed iteration
/// order so downstream costing and formatting are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientAggregate {
    totals: BTreeMap<String, BTreeMap<String, f64>>,
}

impl IngredientAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parsed entry into its (name, unit) bucket.
    pub fn add(&mut self, entry: IngredientEntry) {
        let units = self.totals.entry(entry.name).or_default();
        *units.entry(entry.unit).or_insert(0.0) += entry.quantity;
    }

    /// Per-unit totals for one ingredient name.
    pub fn get(&self, name: &str) -> Option<&BTreeMap<String, f64>> {
        self.totals.get(name)
    }

    /// Iterate (name, unit totals) in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, f64>)> {
        self.totals.iter()
    }

    /// Ingredient names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.totals.keys()
    }

    /// Count of distinct ingredient names.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
