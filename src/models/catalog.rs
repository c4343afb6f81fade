use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One priced product from the retailer catalog.
///
/// Matches the shape the out-of-band price scraper writes: the catalog maps
/// an ingredient match key to the first product found for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub product: Option<String>,

    pub price: f64,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub url: Option<String>,
}

/// Read-only price catalog with a fixed resolution order.
///
/// Keys are held sorted alphabetically; `resolve` walks them in that order
/// and returns the first key contained in the queried name. JSON object
/// ordering is never relied upon, so results are reproducible across loads.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    entries: Vec<(String, CatalogEntry)>,
}

impl PriceCatalog {
    /// Build a catalog from (match key, entry) pairs; keys are lowercased
    /// and sorted so resolution order is independent of input order.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, CatalogEntry)>) -> Self {
        let map: BTreeMap<String, CatalogEntry> = entries
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self {
            entries: map.into_iter().collect(),
        }
    }

    /// Resolve a free-text ingredient name to a catalog entry.
    ///
    /// Substring containment: the first key (alphabetically) that appears
    /// inside `name` wins. Deliberately heuristic — "oil" style keys can
    /// shadow more specific products, which is pinned by tests rather than
    /// corrected.
    pub fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| name.contains(key.as_str()))
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
