use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Registry identifier of a tree. Assigned by the record provider.
pub type TreeId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Health {
    Healthy,
    Moderate,
    Poor,
}

impl Health {
    pub const ALL: [Health; 3] = [Health::Healthy, Health::Moderate, Health::Poor];

    pub fn label(self) -> &'static str {
        match self {
            Health::Healthy => "Healthy",
            Health::Moderate => "Moderate",
            Health::Poor => "Poor",
        }
    }

    /// Trees in this state are counted as health issues on the dashboard.
    pub fn needs_attention(self) -> bool {
        matches!(self, Health::Poor)
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Health {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Health::ALL
            .into_iter()
            .find(|health| health.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::UnknownHealth(value.to_string()))
    }
}

/// One entry of the tree inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub id: TreeId,
    pub name: String,
    pub species: String,
    pub health: Health,
    pub area: String,
    pub lat: f64,
    pub lng: f64,
}

impl TreeRecord {
    pub fn new(
        id: TreeId,
        name: impl Into<String>,
        species: impl Into<String>,
        health: Health,
        area: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            health,
            area: area.into(),
            lat,
            lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_parses_labels_case_insensitively() {
        assert_eq!("healthy".parse::<Health>().unwrap(), Health::Healthy);
        assert_eq!("MODERATE".parse::<Health>().unwrap(), Health::Moderate);
        assert_eq!(" Poor ".parse::<Health>().unwrap(), Health::Poor);
        assert!(matches!(
            "dying".parse::<Health>(),
            Err(Error::UnknownHealth(value)) if value == "dying"
        ));
    }

    #[test]
    fn only_poor_trees_need_attention() {
        assert!(!Health::Healthy.needs_attention());
        assert!(!Health::Moderate.needs_attention());
        assert!(Health::Poor.needs_attention());
    }
}
