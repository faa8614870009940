mod sample;

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::core::geo::GeoBounds;
use crate::error::{Error, Result};
use crate::models::{TreeId, TreeRecord};

/// Read-only access to the tree registry.
pub trait RecordStore {
    /// All records in registry order.
    fn records(&self) -> &[TreeRecord];

    fn get(&self, id: TreeId) -> Option<&TreeRecord> {
        self.records().iter().find(|record| record.id == id)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Ids of records that would be drawn off the map.
    fn outside(&self, bounds: &GeoBounds) -> Vec<TreeId> {
        self.records()
            .iter()
            .filter(|record| !bounds.contains(record.lat, record.lng))
            .map(|record| record.id)
            .collect()
    }
}

/// Registry held entirely in memory. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryStore {
    records: Vec<TreeRecord>,
}

impl InMemoryStore {
    pub fn new(records: Vec<TreeRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    pub fn sample() -> Self {
        Self {
            records: sample::badulla_trees(),
        }
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<TreeRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.as_ref().display(), records = store.len(), "loaded tree registry");
        Ok(store)
    }

    /// Async variant of [`from_json_file`](Self::from_json_file) for use
    /// inside an event loop.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.as_ref().display(), records = store.len(), "loaded tree registry");
        Ok(store)
    }
}

impl RecordStore for InMemoryStore {
    fn records(&self) -> &[TreeRecord] {
        &self.records
    }
}
