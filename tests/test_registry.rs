//! Integration tests for loading the registry and configuration from disk.
//!
//! Tests cover:
//! - JSON record files, sync and async
//! - Duplicate and malformed records
//! - TOML configuration and bounds resolution

mod common;

use common::*;
use urbantrees::core::stats::Summary;

#[test]
fn test_load_record_file() -> anyhow::Result<()> {
    let trees = badulla_trees();
    let file = write_record_file(&trees);

    let store = InMemoryStore::from_json_file(file.path())?;

    assert_eq!(store.len(), 6);
    assert_eq!(store.records(), trees.as_slice());
    Ok(())
}

#[tokio::test]
async fn test_load_record_file_async() -> anyhow::Result<()> {
    let file = write_record_file(&badulla_trees());

    let store = InMemoryStore::load(file.path()).await?;

    assert_eq!(store.get(5).map(|tree| tree.health), Some(Health::Poor));
    Ok(())
}

#[tokio::test]
async fn test_missing_record_file_is_io_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let result = InMemoryStore::load(dir.path().join("missing.json")).await;
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_duplicate_ids_in_file_are_rejected() {
    let mut trees = badulla_trees();
    trees[5].id = 2;
    let file = write_record_file(&trees);

    let result = InMemoryStore::from_json_file(file.path());

    assert!(matches!(result, Err(Error::DuplicateId(2))));
}

#[test]
fn test_malformed_record_file_is_json_error() {
    let file = write_temp_file(".json", r#"[{"id": 1, "name": "Mango Tree"}]"#);
    assert!(matches!(
        InMemoryStore::from_json_file(file.path()),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_summary_over_sample_registry() {
    let store = InMemoryStore::sample();
    let summary = Summary::of(store.records());

    assert_eq!(summary.total, 6);
    assert_eq!(summary.health.healthy, 4);
    assert_eq!(summary.health.moderate, 1);
    assert_eq!(summary.health.poor, 1);
    assert_eq!(summary.areas, 5);
    assert_eq!(summary.species, 6);
    assert_eq!(summary.area_distribution[0], ("Central".to_string(), 2));
}

#[test]
fn test_summary_ignores_search_filter() {
    let store = InMemoryStore::sample();
    let visible = filter(store.records(), "mango");
    assert_eq!(visible.len(), 1);

    // Aggregates are always over the full registry
    let summary = Summary::of(store.records());
    assert_eq!(summary.total, 6);
    assert_eq!(summary.health.healthy, 4);
}

#[test]
fn test_config_file_points_at_records() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let records = serde_json::to_string(&badulla_trees()[..2])?;
    std::fs::write(dir.path().join("trees.json"), records)?;
    let config_path = dir.path().join("urbantrees.toml");
    std::fs::write(
        &config_path,
        r#"
        data = "trees.json"
        start_view = "map"
        fit_bounds_to_data = true
        "#,
    )?;

    let config = Config::load(&config_path)?;
    let store = config.open_store()?;
    let bounds = config.resolve_bounds(&store)?;

    assert_eq!(config.start_view, View::Map);
    assert_eq!(store.len(), 2);
    assert!(store.outside(&bounds).is_empty());
    Ok(())
}

#[test]
fn test_config_rejects_unknown_keys() {
    let file = write_temp_file(".toml", "colour = \"green\"\n");
    assert!(matches!(Config::load(file.path()), Err(Error::Toml(_))));
}

#[test]
fn test_records_outside_bounds_are_kept() -> anyhow::Result<()> {
    let mut trees = badulla_trees();
    trees.push(make_tree(7, "Bo Tree", "Bo", Health::Healthy, "Hali-Ela", 6.95, 81.03));
    let store = InMemoryStore::new(trees)?;

    let bounds = Config::default().resolve_bounds(&store)?;

    assert_eq!(store.len(), 7);
    assert_eq!(store.outside(&bounds), vec![7]);
    let marker = project(store.get(7).unwrap(), &bounds, &Viewport::default());
    assert!(marker.x < 0.0 && marker.y > 100.0);
    Ok(())
}

#[test]
fn test_config_rejects_degenerate_viewport() -> anyhow::Result<()> {
    let file = write_temp_file(".toml", "[viewport]\nwidth = 0.0\nheight = -100.0\n");

    let config = Config::load(file.path())?;

    assert!(matches!(config.viewport(), Err(Error::DegenerateViewport { .. })));
    Ok(())
}
