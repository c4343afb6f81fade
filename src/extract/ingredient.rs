use std::sync::LazyLock;

use regex::Regex;

use crate::extract::units::{is_known_unit, normalize_unit};
use crate::models::IngredientEntry;

/// Marker introducing an inline comma-separated ingredient list.
pub const INLINE_MARKER: &str = "Ingredients:";

/// Parenthesized "(amount unit)" suffix, e.g. "(500g)" or "(2 cups)".
static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+(?:\.\d+)?)\s*([A-Za-z]+)\)").unwrap());

/// Leading "<qty>[ unit] name" shape of a bullet body. The word after the
/// quantity is only treated as a unit if it is in the unit vocabulary.
static LEADING_QTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<qty>\d+(?:\.\d+)?)\s*(?P<word>[A-Za-z]+)?\s*(?P<rest>.*)$").unwrap()
});

/// Parse one classified line into zero or more ingredient entries.
///
/// Bulleted lines yield at most one entry; an inline "Ingredients:" list
/// may yield several. Anything unparseable yields none — a malformed line
/// is never an error.
pub fn parse_ingredient_line(line: &str) -> Vec<IngredientEntry> {
    let trimmed = line.trim();

    if let Some(idx) = trimmed.find(INLINE_MARKER) {
        return parse_inline_list(&trimmed[idx + INLINE_MARKER.len()..]);
    }

    bullet_body(trimmed)
        .and_then(parse_bullet)
        .into_iter()
        .collect()
}

fn bullet_body(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

/// Parse the body of a bulleted ingredient line.
fn parse_bullet(body: &str) -> Option<IngredientEntry> {
    // Prose gate: bullets without a single digit are continuations
    // ("Ensure variety across the week"), not ingredients.
    if !body.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let (paren, without_paren) = split_paren_suffix(body);
    let trimmed = without_paren.trim();

    let mut lead_qty: Option<f64> = None;
    let mut lead_unit: Option<String> = None;

    let name_part = match LEADING_QTY_RE.captures(trimmed) {
        Some(caps) => match caps["qty"].parse::<f64>() {
            Ok(qty) => {
                lead_qty = Some(qty);
                let word = caps.name("word").map_or("", |m| m.as_str());
                let rest = caps.name("rest").map_or("", |m| m.as_str()).trim();

                if !word.is_empty() && is_known_unit(word) {
                    lead_unit = Some(word.to_string());
                    // "2 eggs": the unit word doubles as the name when
                    // nothing else is left.
                    if rest.is_empty() {
                        word.to_string()
                    } else {
                        rest.to_string()
                    }
                } else if word.is_empty() {
                    rest.to_string()
                } else if rest.is_empty() {
                    word.to_string()
                } else {
                    format!("{word} {rest}")
                }
            }
            Err(_) => trimmed.to_string(),
        },
        None => trimmed.to_string(),
    };

    let name = clean_name(&name_part);
    if name.is_empty() {
        return None;
    }

    // A parenthesized amount takes precedence over a leading quantity.
    if let Some((amount, unit_token)) = paren {
        let (unit, factor) = normalize_unit(&unit_token);
        return Some(IngredientEntry::new(name, unit, amount * factor));
    }

    if let Some(qty) = lead_qty {
        let (unit, factor) = match &lead_unit {
            Some(token) => normalize_unit(token),
            None => (String::new(), 1.0),
        };
        return Some(IngredientEntry::new(name, unit, qty * factor));
    }

    Some(IngredientEntry::new(name, "", 1.0))
}

/// Split everything after "Ingredients:" on commas.
fn parse_inline_list(rest: &str) -> Vec<IngredientEntry> {
    rest.split(',')
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return None;
            }

            let (paren, without_paren) = split_paren_suffix(item);
            let name = clean_name(&without_paren);
            if name.is_empty() {
                return None;
            }

            match paren {
                Some((amount, unit_token)) => {
                    let (unit, factor) = normalize_unit(&unit_token);
                    Some(IngredientEntry::new(name, unit, amount * factor))
                }
                None => Some(IngredientEntry::new(name, "", 1.0)),
            }
        })
        .collect()
}

/// Detach a "(amount unit)" suffix, returning it and the remaining text.
fn split_paren_suffix(body: &str) -> (Option<(f64, String)>, String) {
    match PAREN_RE.captures(body) {
        Some(caps) => {
            let matched = caps.get(0).unwrap();
            let amount = caps[1].parse().unwrap_or(1.0);
            let unit = caps[2].to_string();
            let remainder = format!("{}{}", &body[..matched.start()], &body[matched.end()..]);
            (Some((amount, unit)), remainder)
        }
        None => (None, body.to_string()),
    }
}

/// Lowercase, cut preparation notes, strip emphasis and trailing punctuation.
fn clean_name(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '`'))
        .collect::<String>()
        .to_lowercase();

    // " with " and " and " introduce preparation notes, not new
    // ingredients; sequential truncation lands on whichever comes first.
    for sep in [" with ", " and "] {
        if let Some(idx) = name.find(sep) {
            name.truncate(idx);
        }
    }

    name.trim()
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':' | '!' | '-'))
        .trim_start()
        .to_string()
}
