use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{CatalogEntry, PriceCatalog, Profile};

/// Load the profile store from a JSON file.
///
/// A missing file is an empty store, not an error.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, Profile>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the profile store as pretty JSON.
pub fn save_profiles<P: AsRef<Path>>(path: P, profiles: &BTreeMap<String, Profile>) -> Result<()> {
    let json = serde_json::to_string_pretty(profiles)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the price catalog from the JSON the scraper writes.
///
/// Keys are re-sorted on load so substring resolution order never depends
/// on the file's object ordering.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<PriceCatalog> {
    let content = fs::read_to_string(path)?;
    let entries: BTreeMap<String, CatalogEntry> = serde_json::from_str(&content)?;
    Ok(PriceCatalog::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietType, Gender, Goal, Lifestyle};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            gender: Gender::Male,
            weight_kg: 70.0,
            lifestyle: Lifestyle::Active,
            goal: Goal::Maintain,
            allergies: vec!["peanut".to_string()],
            diet_type: DietType::Standard,
            dislikes: Vec::new(),
        }
    }

    #[test]
    fn test_profile_store_roundtrip() {
        let mut store = BTreeMap::new();
        store.insert("Sam".to_string(), sample_profile("Sam"));

        let file = NamedTempFile::new().unwrap();
        save_profiles(file.path(), &store).unwrap();

        let reloaded = load_profiles(file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded["Sam"].weight_kg, 70.0);
        assert_eq!(reloaded["Sam"].allergies, ["peanut"]);
    }

    #[test]
    fn test_missing_profile_store_is_empty() {
        let store = load_profiles("does_not_exist.json").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_catalog() {
        let json = r#"{
            "chicken breast": {"product": "Chicken Breast Fillets", "price": 5.5, "unit": "kg", "url": "https://example.test/c"},
            "banana": {"price": 0.9, "unit": "", "url": null}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let hit = catalog.resolve("chicken breast fillets").unwrap();
        assert_eq!(hit.price, 5.5);
        assert_eq!(hit.unit, "kg");
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_catalog(file.path()).is_err());
    }
}
