pub mod config;
pub mod core;
pub mod error;
pub mod models;

pub use config::Config;
pub use crate::core::geo::{GeoBounds, Marker, MarkerSelection, Projection, Viewport, hit_test, project, project_all};
pub use crate::core::nav::{NavigationController, View, ViewState};
pub use crate::core::query::{Query, filter};
pub use crate::core::stats::Summary;
pub use crate::core::store::{InMemoryStore, RecordStore};
pub use error::{Error, Result};
pub use models::{Health, TreeId, TreeRecord};

#[cfg(feature = "gui")]
pub mod gui;
