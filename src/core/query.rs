//! Free-text search over the registry.
//!
//! A record matches when the query is a case-insensitive substring of its
//! name, species or area. The query is used verbatim: no trimming, no
//! tokenization. An empty query matches everything.

use crate::models::TreeRecord;

/// A search query with the needle folded once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn matches(&self, record: &TreeRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&record.name, &record.species, &record.area]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Stable filter: matching records keep their relative order.
    pub fn filter<'a, I>(&self, records: I) -> Vec<&'a TreeRecord>
    where
        I: IntoIterator<Item = &'a TreeRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

pub fn matches(record: &TreeRecord, query: &str) -> bool {
    Query::new(query).matches(record)
}

pub fn filter<'a>(records: &'a [TreeRecord], query: &str) -> Vec<&'a TreeRecord> {
    Query::new(query).filter(records)
}
