pub mod catalog;
pub mod ingredient;
pub mod ledger;
pub mod profile;

pub use catalog::{CatalogEntry, PriceCatalog};
pub use ingredient::{IngredientAggregate, IngredientEntry};
pub use ledger::CalorieLedger;
pub use profile::{DietType, Gender, Goal, Lifestyle, Profile};
