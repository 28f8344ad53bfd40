use ecosim_data::SpeciesKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-kind creation counters. They only ever grow: deaths do not
/// decrement them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopulationCounters {
    counts: BTreeMap<SpeciesKind, u64>,
}

impl PopulationCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, kind: SpeciesKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the new count.
    pub fn increment(&mut self, kind: SpeciesKind) -> u64 {
        let count = self.counts.entry(kind).or_insert(0);
        *count += 1;
        *count
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesKind, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Two of a kind are needed before any of them can breed.
#[must_use]
pub fn can_reproduce(count: u64) -> bool {
    count >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_reproduce_threshold() {
        assert!(!can_reproduce(0));
        assert!(!can_reproduce(1));
        assert!(can_reproduce(2));
        assert!(can_reproduce(17));
    }

    #[test]
    fn test_counters_are_per_kind() {
        let mut counters = PopulationCounters::new();
        counters.increment(SpeciesKind::Wolf);
        counters.increment(SpeciesKind::Wolf);
        counters.increment(SpeciesKind::Rabbit);
        assert_eq!(counters.get(SpeciesKind::Wolf), 2);
        assert_eq!(counters.get(SpeciesKind::Rabbit), 1);
        assert_eq!(counters.get(SpeciesKind::Shark), 0);
        assert_eq!(counters.total(), 3);
    }
}
