use std::collections::BTreeMap;

/// Per-day calorie totals collected during a plan scan.
///
/// Only days actually seen in the input get an entry; skipped day numbers
/// are not filled in. Totals use last-write-wins: a later "Total:" line for
/// a day replaces the earlier value, so duplicated total lines are harmless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalorieLedger {
    days: BTreeMap<u32, u32>,
}

impl CalorieLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the calorie total for a day, replacing any prior value.
    pub fn record_total(&mut self, day: u32, kcal: u32) {
        self.days.insert(day, kcal);
    }

    pub fn get(&self, day: u32) -> Option<u32> {
        self.days.get(&day).copied()
    }

    /// Iterate (day, kcal) in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.days.iter().map(|(d, k)| (*d, *k))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_total_wins() {
        let mut ledger = CalorieLedger::new();
        ledger.record_total(1, 1800);
        ledger.record_total(1, 1950);
        assert_eq!(ledger.get(1), Some(1950));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_days_iterate_in_order() {
        let mut ledger = CalorieLedger::new();
        ledger.record_total(3, 2100);
        ledger.record_total(1, 1800);
        let days: Vec<(u32, u32)> = ledger.iter().collect();
        assert_eq!(days, [(1, 1800), (3, 2100)]);
    }
}
