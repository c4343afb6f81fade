use crate::pricing::categories::Category;
use crate::pricing::costing::PricedShoppingItem;

/// Render priced items as grouped display lines.
///
/// Categories iterate in Category::DISPLAY_ORDER (alphabetical by label);
/// items within a category keep the aggregate's name order. Each category
/// contributes a `[Label]` header followed by its item lines.
pub fn format_shopping_list(items: &[PricedShoppingItem]) -> Vec<String> {
    let mut lines = Vec::new();

    for category in Category::DISPLAY_ORDER {
        let members: Vec<&PricedShoppingItem> =
            items.iter().filter(|i| i.category == category).collect();
        if members.is_empty() {
            continue;
        }

        lines.push(format!("[{}]", category.label()));
        for item in members {
            lines.push(format_item(item));
        }
    }

    lines
}

/// One display line: `"<Name> – <qty><unit>"`, with a trailing `*` for
/// fallback-priced estimates and the catalog link when available.
pub fn format_item(item: &PricedShoppingItem) -> String {
    let qty = if item.unit.is_empty() {
        format!("{}", item.quantity as i64)
    } else {
        format!("{:.0}{}", item.quantity, item.unit)
    };

    let mut line = format!("{} – {}", item.display_name, qty);
    if item.estimated {
        line.push_str("  *");
    }
    if let Some(url) = &item.url {
        line.push_str(&format!("  ({url})"));
    }
    line
}
