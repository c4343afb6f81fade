pub mod categories;
pub mod costing;
pub mod format;

pub use categories::{categorize, Category};
pub use costing::{
    is_pantry_staple, title_case, CostedPlan, CostingEngine, PricedShoppingItem,
    DEFAULT_FALLBACK_PRICE, PANTRY_STAPLES,
};
pub use format::{format_item, format_shopping_list};
