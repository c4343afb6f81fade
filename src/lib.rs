pub mod cli;
pub mod error;
pub mod export;
pub mod extract;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod state;
pub mod targets;

pub use error::{PlanError, Result};
pub use extract::{extract_plan, PlanExtract};
pub use models::{CalorieLedger, CatalogEntry, IngredientAggregate, IngredientEntry, PriceCatalog};
