use std::io::Write;

use tempfile::NamedTempFile;
use urbantrees::{GeoBounds, Health, TreeRecord};

/// The six trees of the central Badulla registry.
pub fn badulla_trees() -> Vec<TreeRecord> {
    vec![
        make_tree(1, "Mango Tree", "Mango", Health::Healthy, "Central", 6.9897, 81.0559),
        make_tree(2, "Coconut Palm", "Coconut", Health::Healthy, "Central", 6.9912, 81.0545),
        make_tree(3, "Mahogany", "Mahogany", Health::Moderate, "North", 6.988, 81.057),
        make_tree(4, "Jak Tree", "Jak", Health::Healthy, "South", 6.9865, 81.0555),
        make_tree(5, "Neem Tree", "Neem", Health::Poor, "East", 6.992, 81.053),
        make_tree(6, "Tamarind", "Tamarind", Health::Healthy, "West", 6.9905, 81.0585),
    ]
}

pub fn make_tree(
    id: i64,
    name: &str,
    species: &str,
    health: Health,
    area: &str,
    lat: f64,
    lng: f64,
) -> TreeRecord {
    TreeRecord::new(id, name, species, health, area, lat, lng)
}

/// Bounding box of the Badulla map.
pub fn badulla_bounds() -> GeoBounds {
    GeoBounds::new(6.9865, 6.993, 81.052, 81.0585).expect("Badulla bounds are valid")
}

/// Writes `contents` to a temp file with the given suffix.
/// The file is removed when dropped.
pub fn write_temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Writes `records` as a JSON record file.
pub fn write_record_file(records: &[TreeRecord]) -> NamedTempFile {
    let json = serde_json::to_string_pretty(records).expect("Failed to encode records");
    write_temp_file(".json", &json)
}

pub fn ids(records: &[&TreeRecord]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}
