pub mod draft;
pub mod geo;
pub mod nav;
pub mod query;
pub mod stats;
pub mod store;
