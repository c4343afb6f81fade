use std::fs;
use std::path::Path;

use clap::Parser;

use meal_ledger_rs::cli::{Cli, Command};
use meal_ledger_rs::error::{PlanError, Result};
use meal_ledger_rs::export;
use meal_ledger_rs::extract::extract_plan;
use meal_ledger_rs::interface::{
    collect_profile, display_avoidance_warnings, display_calorie_ledger, display_shopping_list,
    prompt_yes_no,
};
use meal_ledger_rs::models::{PriceCatalog, Profile};
use meal_ledger_rs::pricing::CostingEngine;
use meal_ledger_rs::state::{load_catalog, load_profiles, save_profiles};
use meal_ledger_rs::targets;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {
        command,
        catalog,
        profiles,
    } = Cli::parse();

    match command {
        Command::Scan {
            plan,
            fallback_price,
            profile,
            export_text,
            export_csv,
        } => cmd_scan(
            &catalog,
            &profiles,
            &plan,
            fallback_price,
            profile.as_deref(),
            export_text.as_deref(),
            export_csv.as_deref(),
        ),
        Command::Profile => cmd_profile(&profiles),
        Command::Target { profile } => cmd_target(&profiles, profile.as_deref()),
    }
}

/// Scan a rendered meal plan into a calorie ledger and a priced shopping list.
fn cmd_scan(
    catalog_path: &str,
    profiles_path: &str,
    plan_file: &str,
    fallback_price: Option<f64>,
    profile_name: Option<&str>,
    export_text: Option<&str>,
    export_csv: Option<&str>,
) -> Result<()> {
    let plan_path = Path::new(plan_file);
    if !plan_path.exists() {
        eprintln!("Meal plan file not found: {}", plan_file);
        return Ok(());
    }

    let text = fs::read_to_string(plan_path)?;

    let catalog = if Path::new(catalog_path).exists() {
        let catalog = load_catalog(catalog_path)?;
        println!("Loaded {} catalog entries", catalog.len());
        catalog
    } else {
        println!(
            "Price catalog not found at {}; every line will use the fallback price.",
            catalog_path
        );
        PriceCatalog::default()
    };

    let profile = match profile_name {
        Some(name) => Some(lookup_profile(profiles_path, Some(name))?),
        None => None,
    };

    let extract = extract_plan(&text);

    display_calorie_ledger(&extract.calories, profile.as_ref().map(targets::daily_target));

    let mut engine = CostingEngine::new(catalog);
    if let Some(price) = fallback_price {
        engine = engine.with_fallback_price(price);
    }
    let costed = engine.price(&extract.ingredients);

    display_shopping_list(&costed);

    if let Some(profile) = &profile {
        let warnings: Vec<(String, String)> = costed
            .items
            .iter()
            .filter_map(|item| {
                profile
                    .avoidance_match(&item.display_name)
                    .map(|term| (item.display_name.clone(), term.to_string()))
            })
            .collect();
        display_avoidance_warnings(&warnings);
    }

    if let Some(path) = export_text {
        export::write_text(path, &costed)?;
        println!("Shopping list written to {}", path);
    }

    if let Some(path) = export_csv {
        export::write_csv(path, &costed)?;
        println!("Priced list written to {}", path);
    }

    Ok(())
}

/// Create or update a profile interactively.
fn cmd_profile(profiles_path: &str) -> Result<()> {
    let mut store = load_profiles(profiles_path)?;
    let profile = collect_profile()?;

    if store.contains_key(&profile.name) {
        let overwrite = prompt_yes_no(
            &format!("Profile '{}' exists. Overwrite?", profile.name),
            true,
        )?;
        if !overwrite {
            println!("Profile unchanged.");
            return Ok(());
        }
    }

    let name = profile.name.clone();
    store.insert(name.clone(), profile);
    save_profiles(profiles_path, &store)?;
    println!("Profile saved for {}.", name);

    Ok(())
}

/// Show maintenance calories and the daily target for a profile.
fn cmd_target(profiles_path: &str, name: Option<&str>) -> Result<()> {
    let profile = lookup_profile(profiles_path, name)?;

    println!(
        "Profile: {} ({}, {} kg, {}, {})",
        profile.name,
        profile.gender.label(),
        profile.weight_kg,
        profile.lifestyle.label(),
        profile.goal.label()
    );
    println!(
        "Maintenance: {:.0} kcal/day",
        targets::maintenance_calories(&profile)
    );
    println!(
        "Daily target: {} kcal (capped at {})",
        targets::daily_target(&profile),
        targets::MAX_DAILY_TARGET
    );

    Ok(())
}

/// Fetch a profile by name, or the only stored profile when none is given.
fn lookup_profile(profiles_path: &str, name: Option<&str>) -> Result<Profile> {
    let store = load_profiles(profiles_path)?;

    match name {
        Some(name) => store
            .get(name)
            .cloned()
            .ok_or_else(|| PlanError::ProfileNotFound(name.to_string())),
        None if store.len() == 1 => store
            .into_values()
            .next()
            .ok_or_else(|| PlanError::InvalidInput("Profile store is empty".to_string())),
        None if store.is_empty() => Err(PlanError::InvalidInput(
            "No profiles stored; run the profile command first".to_string(),
        )),
        None => Err(PlanError::InvalidInput(
            "Multiple profiles stored; pass --profile <name>".to_string(),
        )),
    }
}
