use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::pricing::{format_shopping_list, CostedPlan};

/// Write the shopping list as plain text, one display line per row.
pub fn write_text<P: AsRef<Path>>(path: P, costed: &CostedPlan) -> Result<()> {
    let mut content = format_shopping_list(&costed.items).join("\n");
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Write the priced shopping list as CSV.
pub fn write_csv<P: AsRef<Path>>(path: P, costed: &CostedPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "category",
        "item",
        "quantity",
        "unit",
        "unit_price",
        "line_cost",
        "estimated",
        "url",
    ])?;

    for item in &costed.items {
        wtr.write_record([
            item.category.label().to_string(),
            item.display_name.clone(),
            format!("{}", item.quantity),
            item.unit.clone(),
            format!("{:.2}", item.unit_price),
            format!("{:.2}", item.line_cost),
            item.estimated.to_string(),
            item.url.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
