pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, prompt_list, prompt_name, prompt_weight, prompt_yes_no};
pub use render::{display_avoidance_warnings, display_calorie_ledger, display_shopping_list};
