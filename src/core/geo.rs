//! Projection of tree coordinates into map display space.
//!
//! Display space is a `width x height` box (100 x 100 by default, so values
//! read as percentages) with the origin in the top-left corner. Longitude
//! grows to the right and latitude grows upwards, so screen `y` is inverted
//! against latitude.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Health, TreeId, TreeRecord};

/// Geographic rectangle used to normalize coordinates.
///
/// Construction rejects boxes with a zero, negative or non-finite span, so a
/// `GeoBounds` value can always be divided by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl GeoBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Result<Self> {
        let lat_span = max_lat - min_lat;
        let lng_span = max_lng - min_lng;
        let finite = [min_lat, max_lat, min_lng, max_lng, lat_span, lng_span]
            .iter()
            .all(|value| value.is_finite());
        if !finite || !(lat_span > 0.0) || !(lng_span > 0.0) {
            return Err(Error::DegenerateBounds { lat_span, lng_span });
        }
        Ok(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// The Badulla municipal area.
    pub fn badulla() -> Self {
        Self {
            min_lat: 6.9865,
            max_lat: 6.993,
            min_lng: 81.052,
            max_lng: 81.0585,
        }
    }

    /// Smallest box around every record, grown by `margin` degrees per side.
    pub fn enclosing(records: &[TreeRecord], margin: f64) -> Result<Self> {
        let first = records.first().ok_or(Error::NoRecords)?;
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        let (mut min_lng, mut max_lng) = (first.lng, first.lng);
        for record in &records[1..] {
            min_lat = min_lat.min(record.lat);
            max_lat = max_lat.max(record.lat);
            min_lng = min_lng.min(record.lng);
            max_lng = max_lng.max(record.lng);
        }
        Self::new(
            min_lat - margin,
            max_lat + margin,
            min_lng - margin,
            max_lng + margin,
        )
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lng(&self) -> f64 {
        self.min_lng
    }

    pub fn max_lng(&self) -> f64 {
        self.max_lng
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Inclusive on every edge.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::badulla()
    }
}

/// Size of the display box that projections are scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Both sides must be finite and positive, since projections and the
    /// renderer scale by them.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(Error::DegenerateViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}

/// A position in display space. Not clamped to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    pub x: f64,
    pub y: f64,
}

impl Projection {
    pub fn distance_2(&self, other: &Projection) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_within(&self, viewport: &Viewport) -> bool {
        (0.0..=viewport.width).contains(&self.x) && (0.0..=viewport.height).contains(&self.y)
    }
}

pub fn project_point(lat: f64, lng: f64, bounds: &GeoBounds, viewport: &Viewport) -> Projection {
    Projection {
        x: ((lng - bounds.min_lng) / bounds.lng_span()) * viewport.width,
        y: ((bounds.max_lat - lat) / bounds.lat_span()) * viewport.height,
    }
}

pub fn project(record: &TreeRecord, bounds: &GeoBounds, viewport: &Viewport) -> Projection {
    project_point(record.lat, record.lng, bounds, viewport)
}

/// A projected record, ready to be drawn as a map pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: TreeId,
    pub health: Health,
    pub position: Projection,
}

pub fn project_all<'a, I>(records: I, bounds: &GeoBounds, viewport: &Viewport) -> Vec<Marker>
where
    I: IntoIterator<Item = &'a TreeRecord>,
{
    records
        .into_iter()
        .map(|record| Marker {
            id: record.id,
            health: record.health,
            position: project(record, bounds, viewport),
        })
        .collect()
}

/// Resolve a click in display space to the closest marker within `radius`.
///
/// Markers later in the slice are drawn on top, so they win ties.
pub fn hit_test(markers: &[Marker], point: Projection, radius: f64) -> Option<TreeId> {
    let max_distance_2 = radius * radius;
    let mut best: Option<(TreeId, f64)> = None;
    for marker in markers {
        let distance_2 = marker.position.distance_2(&point);
        if distance_2 > max_distance_2 {
            continue;
        }
        match best {
            Some((_, best_distance_2)) if distance_2 > best_distance_2 => {}
            _ => best = Some((marker.id, distance_2)),
        }
    }
    best.map(|(id, _)| id)
}

/// The single highlighted marker on the map.
///
/// Selecting the already-selected id keeps it selected; use [`clear`] to
/// deselect.
///
/// [`clear`]: MarkerSelection::clear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerSelection {
    selected: Option<TreeId>,
}

impl MarkerSelection {
    /// Returns `true` if the selection changed.
    pub fn select_at(&mut self, id: TreeId) -> bool {
        self.selected.replace(id) != Some(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<TreeId> {
        self.selected
    }

    pub fn is_selected(&self, id: TreeId) -> bool {
        self.selected == Some(id)
    }
}
