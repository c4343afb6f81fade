use std::collections::HashMap;
use std::sync::LazyLock;

/// Unit vocabulary mapped to (canonical unit, scale factor).
///
/// Colloquial measures scale into grams or milliliters; countable words
/// collapse to the dimensionless "unit"; canonical units pass through.
static UNIT_TABLE: LazyLock<HashMap<&'static str, (&'static str, f64)>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("handful", ("g", 30.0));
    m.insert("scoop", ("g", 30.0));
    m.insert("cup", ("ml", 240.0));
    m.insert("tbsp", ("ml", 15.0));
    m.insert("tsp", ("ml", 5.0));
    m.insert("slice", ("unit", 1.0));
    m.insert("egg", ("unit", 1.0));
    m.insert("eggs", ("unit", 1.0));
    m.insert("clove", ("unit", 1.0));
    m.insert("g", ("g", 1.0));
    m.insert("kg", ("kg", 1.0));
    m.insert("ml", ("ml", 1.0));
    m.insert("l", ("l", 1.0));
    m
});

/// Normalize a raw unit token to a canonical (unit, scale factor) pair.
///
/// A plural token falls back to its singular before lookup. Unrecognized
/// non-empty tokens are kept literally with factor 1 so odd units degrade
/// gracefully instead of erroring; an empty token yields ("", 1).
pub fn normalize_unit(token: &str) -> (String, f64) {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return (String::new(), 1.0);
    }

    if let Some(&(unit, factor)) = UNIT_TABLE.get(token.as_str()) {
        return (unit.to_string(), factor);
    }

    if let Some(singular) = token.strip_suffix('s') {
        if let Some(&(unit, factor)) = UNIT_TABLE.get(singular) {
            return (unit.to_string(), factor);
        }
    }

    (token, 1.0)
}

/// Whether a token belongs to the unit vocabulary.
///
/// The ingredient parser uses this to decide if the word after a leading
/// quantity is a measure ("1 cup spinach") or part of the name
/// ("2 chicken breasts").
pub fn is_known_unit(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    UNIT_TABLE.contains_key(token.as_str())
        || token
            .strip_suffix('s')
            .is_some_and(|singular| UNIT_TABLE.contains_key(singular))
}
