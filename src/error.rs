//! Error types for the tree registry core.

use thiserror::Error;

use crate::models::TreeId;

#[derive(Debug, Error)]
pub enum Error {
    /// The bounding box has no area, so projection would divide by zero.
    #[error("degenerate bounding box: latitude span {lat_span}, longitude span {lng_span}")]
    DegenerateBounds { lat_span: f64, lng_span: f64 },

    #[error("degenerate viewport: {width} x {height}")]
    DegenerateViewport { width: f64, height: f64 },

    #[error("cannot derive a bounding box from an empty registry")]
    NoRecords,

    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("unknown health status: {0}")]
    UnknownHealth(String),

    #[error("duplicate tree id {0}")]
    DuplicateId(TreeId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed config file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
