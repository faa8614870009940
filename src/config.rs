//! Start-up configuration, read from an optional TOML file.
//!
//! ```toml
//! data = "trees.json"
//! start_view = "map"
//! log_level = "debug"
//! fit_bounds_to_data = false
//!
//! [bounds]
//! min_lat = 6.9865
//! max_lat = 6.993
//! min_lng = 81.052
//! max_lng = 81.0585
//!
//! [viewport]
//! width = 100.0
//! height = 100.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::core::geo::{GeoBounds, Viewport};
use crate::core::nav::View;
use crate::core::store::{InMemoryStore, RecordStore};
use crate::error::Result;

/// Degrees added around the data when the map box is fitted to the records.
const FIT_MARGIN: f64 = 0.0005;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundsConfig {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        let bounds = GeoBounds::badulla();
        Self {
            min_lat: bounds.min_lat(),
            max_lat: bounds.max_lat(),
            min_lng: bounds.min_lng(),
            max_lng: bounds.max_lng(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON record file. The bundled sample registry is used when unset.
    pub data: Option<PathBuf>,
    pub start_view: View,
    pub log_level: String,
    pub bounds: BoundsConfig,
    pub viewport: Viewport,
    /// Ignore `bounds` and size the map to the loaded records.
    pub fit_bounds_to_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            start_view: View::Dashboard,
            log_level: "info".to_string(),
            bounds: BoundsConfig::default(),
            viewport: Viewport::default(),
            fit_bounds_to_data: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_toml_str(&text)?;
        // Relative data paths are relative to the config file.
        if let (Some(data), Some(dir)) = (config.data.as_mut(), path.as_ref().parent()) {
            if data.is_relative() {
                *data = dir.join(&*data);
            }
        }
        Ok(config)
    }

    /// The configured box, validated.
    pub fn bounds(&self) -> Result<GeoBounds> {
        let b = self.bounds;
        GeoBounds::new(b.min_lat, b.max_lat, b.min_lng, b.max_lng)
    }

    /// The configured display box, validated.
    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.viewport.width, self.viewport.height)
    }

    /// The box the map uses for `store`. Records that fall outside it are
    /// reported but kept.
    pub fn resolve_bounds(&self, store: &InMemoryStore) -> Result<GeoBounds> {
        let bounds = if self.fit_bounds_to_data && !store.is_empty() {
            GeoBounds::enclosing(store.records(), FIT_MARGIN)?
        } else {
            self.bounds()?
        };
        let outside = store.outside(&bounds);
        if !outside.is_empty() {
            warn!(?outside, "trees fall outside the map bounds and will not be visible");
        }
        Ok(bounds)
    }

    /// Load the record store this configuration points at.
    pub fn open_store(&self) -> Result<InMemoryStore> {
        match &self.data {
            Some(path) => InMemoryStore::from_json_file(path),
            None => Ok(InMemoryStore::sample()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bounds().unwrap(), GeoBounds::badulla());
    }

    #[test]
    fn reads_view_key_and_partial_tables() {
        let config = Config::from_toml_str(
            r#"
            start_view = "inventory"
            [viewport]
            width = 640.0
            height = 480.0
            "#,
        )
        .unwrap();
        assert_eq!(config.start_view, View::Inventory);
        assert_eq!(config.viewport.width, 640.0);
        assert!(config.data.is_none());
    }

    #[test]
    fn unknown_view_key_fails_to_parse() {
        assert!(matches!(
            Config::from_toml_str(r#"start_view = "forest""#),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn degenerate_bounds_fail_on_resolve() {
        let config = Config::from_toml_str(
            r#"
            [bounds]
            min_lat = 6.99
            max_lat = 6.99
            min_lng = 81.05
            max_lng = 81.06
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.resolve_bounds(&InMemoryStore::sample()),
            Err(Error::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn degenerate_viewport_fails_on_resolve() {
        for table in [
            "[viewport]\nwidth = 0.0\nheight = -100.0",
            "[viewport]\nwidth = nan\nheight = 100.0",
            "[viewport]\nwidth = 100.0\nheight = 0.0",
        ] {
            let config = Config::from_toml_str(table).unwrap();
            assert!(
                matches!(config.viewport(), Err(Error::DegenerateViewport { .. })),
                "{table}"
            );
        }
        assert_eq!(Config::default().viewport().unwrap(), Viewport::default());
    }

    #[test]
    fn fitted_bounds_contain_every_record() {
        let config = Config {
            fit_bounds_to_data: true,
            ..Config::default()
        };
        let store = InMemoryStore::sample();
        let bounds = config.resolve_bounds(&store).unwrap();
        assert!(store.outside(&bounds).is_empty());
        assert!(bounds.min_lng() < 81.053);
    }
}
