//! Validation of the add-tree form.

use thiserror::Error;

use crate::core::geo::GeoBounds;
use crate::models::Health;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown health status {0:?}")]
    InvalidHealth(String),

    #[error("{field} must be a number, got {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: String },
}

/// Raw form input, every field as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeDraft {
    pub name: String,
    pub species: String,
    pub area: String,
    pub health: String,
    pub lat: String,
    pub lng: String,
}

impl Default for TreeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            area: String::new(),
            health: Health::Healthy.label().to_string(),
            lat: String::new(),
            lng: String::new(),
        }
    }
}

/// A validated tree, ready to be handed to the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTree {
    pub name: String,
    pub species: String,
    pub health: Health,
    pub area: String,
    pub lat: f64,
    pub lng: f64,
    /// The position lies outside the configured map bounds and will not be
    /// visible on the map.
    pub outside_bounds: bool,
}

impl TreeDraft {
    pub fn validate(&self, bounds: &GeoBounds) -> Result<NewTree, DraftError> {
        let name = required("name", &self.name)?;
        let species = required("species", &self.species)?;
        let area = required("area", &self.area)?;
        let health = self
            .health
            .parse::<Health>()
            .map_err(|_| DraftError::InvalidHealth(self.health.clone()))?;
        let lat = coordinate("latitude", &self.lat, 90.0)?;
        let lng = coordinate("longitude", &self.lng, 180.0)?;

        Ok(NewTree {
            name,
            species,
            health,
            area,
            lat,
            lng,
            outside_bounds: !bounds.contains(lat, lng),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(value.to_string())
}

fn coordinate(field: &'static str, value: &str, limit: f64) -> Result<f64, DraftError> {
    let trimmed = required(field, value)?;
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| DraftError::InvalidCoordinate {
            field,
            value: trimmed.clone(),
        })?;
    if !parsed.is_finite() || parsed.abs() > limit {
        return Err(DraftError::OutOfRange {
            field,
            value: trimmed,
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TreeDraft {
        TreeDraft {
            name: " Neem Tree ".into(),
            species: "Neem".into(),
            area: "East".into(),
            health: "poor".into(),
            lat: "6.992".into(),
            lng: "81.053".into(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed_and_parsed() {
        let tree = draft().validate(&GeoBounds::badulla()).unwrap();
        assert_eq!(tree.name, "Neem Tree");
        assert_eq!(tree.health, Health::Poor);
        assert!((tree.lat - 6.992).abs() < 1e-12);
        assert!(!tree.outside_bounds);
    }

    #[test]
    fn positions_outside_the_map_are_flagged_not_rejected() {
        let mut outside = draft();
        outside.lat = "7.5".into();
        let tree = outside.validate(&GeoBounds::badulla()).unwrap();
        assert!(tree.outside_bounds);
    }

    #[test]
    fn reports_the_first_problem() {
        let bounds = GeoBounds::badulla();

        let mut missing = draft();
        missing.species = "   ".into();
        assert_eq!(missing.validate(&bounds), Err(DraftError::MissingField("species")));

        let mut health = draft();
        health.health = "Dying".into();
        assert_eq!(
            health.validate(&bounds),
            Err(DraftError::InvalidHealth("Dying".into()))
        );

        let mut text = draft();
        text.lng = "east".into();
        assert!(matches!(
            text.validate(&bounds),
            Err(DraftError::InvalidCoordinate { field: "longitude", .. })
        ));

        let mut range = draft();
        range.lat = "91".into();
        assert!(matches!(
            range.validate(&bounds),
            Err(DraftError::OutOfRange { field: "latitude", .. })
        ));
    }

    #[test]
    fn default_draft_starts_healthy_and_empty() {
        let draft = TreeDraft::default();
        assert_eq!(draft.health, "Healthy");
        assert_eq!(
            draft.validate(&GeoBounds::badulla()),
            Err(DraftError::MissingField("name"))
        );
    }
}
