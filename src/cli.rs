use clap::{Parser, Subcommand};

/// MealLedger — turns a generated meal plan into a calorie ledger and a priced shopping list.
#[derive(Parser, Debug)]
#[command(name = "meal_ledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the price catalog JSON file.
    #[arg(short, long, default_value = "price_catalog.json")]
    pub catalog: String,

    /// Path to the profile store JSON file.
    #[arg(short, long, default_value = "profiles.json")]
    pub profiles: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a meal plan text file: calorie ledger plus priced shopping list.
    Scan {
        /// Path to the rendered meal plan.
        plan: String,

        /// Fallback price applied when an ingredient misses the catalog.
        #[arg(long)]
        fallback_price: Option<f64>,

        /// Profile whose target, allergies, and dislikes are applied to the output.
        #[arg(long)]
        profile: Option<String>,

        /// Write the shopping list to a plain-text file.
        #[arg(long)]
        export_text: Option<String>,

        /// Write the priced shopping list to a CSV file.
        #[arg(long)]
        export_csv: Option<String>,
    },

    /// Create or update a user profile interactively.
    Profile,

    /// Show maintenance calories and the daily calorie target for a profile.
    Target {
        /// Profile name (defaults to the only stored profile).
        #[arg(long)]
        profile: Option<String>,
    },
}
