//! Dashboard and map summaries. Always computed over the full registry, never
//! over a filtered view, and recomputed on every call.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Health, TreeRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthCounts {
    pub healthy: usize,
    pub moderate: usize,
    pub poor: usize,
}

impl HealthCounts {
    pub fn get(&self, health: Health) -> usize {
        match health {
            Health::Healthy => self.healthy,
            Health::Moderate => self.moderate,
            Health::Poor => self.poor,
        }
    }

    pub fn total(&self) -> usize {
        self.healthy + self.moderate + self.poor
    }
}

pub fn count_by_health(records: &[TreeRecord]) -> HealthCounts {
    let mut counts = HealthCounts::default();
    for record in records {
        match record.health {
            Health::Healthy => counts.healthy += 1,
            Health::Moderate => counts.moderate += 1,
            Health::Poor => counts.poor += 1,
        }
    }
    counts
}

pub fn distinct_areas(records: &[TreeRecord]) -> usize {
    records
        .iter()
        .map(|record| record.area.as_str())
        .collect::<HashSet<_>>()
        .len()
}

pub fn distinct_species(records: &[TreeRecord]) -> usize {
    records
        .iter()
        .map(|record| record.species.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Count per key, largest first. Equal counts are ordered by key.
pub fn distribution<F>(records: &[TreeRecord], key: F) -> Vec<(String, usize)>
where
    F: Fn(&TreeRecord) -> &str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_default() += 1;
    }
    let mut entries: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();
    // BTreeMap order is already by key, and the sort is stable.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub health: HealthCounts,
    pub areas: usize,
    pub species: usize,
    pub species_distribution: Vec<(String, usize)>,
    pub area_distribution: Vec<(String, usize)>,
}

impl Summary {
    pub fn of(records: &[TreeRecord]) -> Self {
        Self {
            total: records.len(),
            health: count_by_health(records),
            areas: distinct_areas(records),
            species: distinct_species(records),
            species_distribution: distribution(records, |record| record.species.as_str()),
            area_distribution: distribution(records, |record| record.area.as_str()),
        }
    }

    /// Trees flagged as needing attention.
    pub fn health_issues(&self) -> usize {
        Health::ALL
            .into_iter()
            .filter(|health| health.needs_attention())
            .map(|health| self.health.get(health))
            .sum()
    }
}
