// Each test binary uses its own subset of the fixtures.
#[allow(dead_code)]
mod fixtures;
#[allow(unused_imports)]
pub use fixtures::*;

// Re-export commonly used types from urbantrees for tests
#[allow(unused_imports)]
pub use urbantrees::{
    Config, Error, GeoBounds, Health, InMemoryStore, NavigationController, Projection, Query,
    RecordStore, View, ViewState, Viewport, filter, hit_test, project, project_all,
};
