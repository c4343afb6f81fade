use std::sync::LazyLock;

use regex::Regex;

/// "Day <n>" heading, tolerating leading emoji/markdown clutter.
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\W*day\s+(\d+)").unwrap());

/// "Total: <n> kcal" statement anywhere in a line.
static TOTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)total:\s*(\d+)\s*kcal").unwrap());

/// Drop markdown emphasis and heading markers before matching so
/// "**Total: 1800 kcal**" and "## Day 2" classify like their plain forms.
fn strip_emphasis(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, '*' | '_' | '#' | '`'))
        .collect()
}

/// Day number if the line is a day marker.
pub fn parse_day_marker(line: &str) -> Option<u32> {
    let plain = strip_emphasis(line);
    DAY_RE
        .captures(plain.trim())
        .and_then(|caps| caps[1].parse().ok())
}

/// Calorie total if the line carries a "Total: N kcal" statement.
pub fn parse_calorie_total(line: &str) -> Option<u32> {
    let plain = strip_emphasis(line);
    TOTAL_RE
        .captures(&plain)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_marker_plain() {
        assert_eq!(parse_day_marker("Day 1"), Some(1));
        assert_eq!(parse_day_marker("day 12 meal plan"), Some(12));
    }

    #[test]
    fn test_day_marker_with_clutter() {
        assert_eq!(parse_day_marker("📅 Day 3"), Some(3));
        assert_eq!(parse_day_marker("## Day 2"), Some(2));
        assert_eq!(parse_day_marker("**Day 4**"), Some(4));
    }

    #[test]
    fn test_day_marker_rejects_prose() {
        assert_eq!(parse_day_marker("Monday 5"), None);
        assert_eq!(parse_day_marker("A great day 1 to start"), None);
        assert_eq!(parse_day_marker("Day one"), None);
    }

    #[test]
    fn test_calorie_total() {
        assert_eq!(parse_calorie_total("Total: 1800 kcal"), Some(1800));
        assert_eq!(parse_calorie_total("  **Total: 2000 kcal**"), Some(2000));
        assert_eq!(parse_calorie_total("total:1950kcal"), Some(1950));
    }

    #[test]
    fn test_calorie_total_requires_marker() {
        // Bare kcal mentions are not totals under the single-total policy.
        assert_eq!(parse_calorie_total("Breakfast: 400 kcal"), None);
        assert_eq!(parse_calorie_total("Total: plenty"), None);
    }
}
