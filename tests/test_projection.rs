//! Integration tests for map projection and marker interaction.

mod common;

use common::*;

#[test]
fn test_reference_tree_lands_at_known_position() {
    let bounds = badulla_bounds();
    let tree = make_tree(1, "Mango Tree", "Mango", Health::Healthy, "Central", 6.9897, 81.0559);

    let position = project(&tree, &bounds, &Viewport::default());

    assert!((position.x - 60.0).abs() < 1e-6, "x = {}", position.x);
    assert!((position.y - 50.769).abs() < 1e-3, "y = {}", position.y);
}

#[test]
fn test_projection_is_pure() {
    let bounds = badulla_bounds();
    let viewport = Viewport::default();
    for tree in badulla_trees() {
        let first = project(&tree, &bounds, &viewport);
        let second = project(&tree, &bounds, &viewport);
        assert_eq!(first, second);
    }
}

#[test]
fn test_north_is_up_and_east_is_right() {
    let bounds = badulla_bounds();
    let viewport = Viewport::default();
    let south_west = make_tree(1, "a", "a", Health::Healthy, "a", 6.987, 81.053);
    let north_east = make_tree(2, "b", "b", Health::Healthy, "b", 6.992, 81.058);

    let sw = project(&south_west, &bounds, &viewport);
    let ne = project(&north_east, &bounds, &viewport);

    assert!(ne.x > sw.x);
    assert!(ne.y < sw.y);
}

#[test]
fn test_sample_registry_stays_on_the_map() {
    let bounds = badulla_bounds();
    let viewport = Viewport::default();
    let markers = project_all(&badulla_trees(), &bounds, &viewport);

    assert_eq!(markers.len(), 6);
    assert!(markers.iter().all(|marker| marker.position.is_within(&viewport)));
    let ids: Vec<i64> = markers.iter().map(|marker| marker.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_markers_follow_the_filtered_records() {
    let trees = badulla_trees();
    let visible = filter(&trees, "central");
    let markers = project_all(visible.iter().copied(), &badulla_bounds(), &Viewport::default());

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].id, 1);
    assert_eq!(markers[1].id, 2);
    assert_eq!(markers[0].health, Health::Healthy);
}

#[test]
fn test_degenerate_bounds_are_rejected_up_front() {
    assert!(matches!(
        GeoBounds::new(6.99, 6.99, 81.052, 81.0585),
        Err(Error::DegenerateBounds { .. })
    ));
    assert!(matches!(
        GeoBounds::new(6.9865, 6.993, 81.05, 81.05),
        Err(Error::DegenerateBounds { .. })
    ));
    // Finite corners whose span overflows
    assert!(matches!(
        GeoBounds::new(-1e308, 1e308, 81.052, 81.0585),
        Err(Error::DegenerateBounds { .. })
    ));
}

#[test]
fn test_clicking_a_marker_resolves_its_id() {
    let markers = project_all(&badulla_trees(), &badulla_bounds(), &Viewport::default());
    let mahogany = markers.iter().find(|marker| marker.id == 3).unwrap().position;

    let click = Projection {
        x: mahogany.x + 0.5,
        y: mahogany.y - 0.5,
    };
    assert_eq!(hit_test(&markers, click, 2.0), Some(3));
    assert_eq!(hit_test(&markers, Projection { x: -50.0, y: -50.0 }, 2.0), None);
}
