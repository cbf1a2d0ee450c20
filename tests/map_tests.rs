use epicenter::data::EarthquakeList;
use epicenter::map::{nearest_within, renderable_events, CLICK_TOLERANCE_PX};
use pretty_assertions::assert_eq;

const FEED_FIXTURE: &str = include_str!("fixtures/all_day.geojson");

fn fixture_list() -> EarthquakeList {
    serde_json::from_str(FEED_FIXTURE).unwrap()
}

#[test]
fn one_marker_per_event_at_or_above_threshold() {
    let list = fixture_list();
    let events = renderable_events(&list, 2.0);

    // 5.8 and exactly 2.0 render; 1.2 and the null-magnitude record do not
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].magnitude(), Some(5.8));
    assert_eq!(events[1].magnitude(), Some(2.0));
}

#[test]
fn lower_threshold_admits_more_events() {
    let list = fixture_list();
    let events = renderable_events(&list, 1.0);

    // still excludes the record with no magnitude at all
    assert_eq!(events.len(), 3);
}

#[test]
fn empty_list_renders_nothing() {
    let list = EarthquakeList::default();
    assert!(renderable_events(&list, 2.0).is_empty());
}

#[test]
fn click_on_marker_hits_it() {
    let positions = [(100.0, 100.0), (300.0, 250.0)];

    assert_eq!(nearest_within(&positions, 100.0, 100.0, CLICK_TOLERANCE_PX), Some(0));
    assert_eq!(nearest_within(&positions, 305.0, 247.0, CLICK_TOLERANCE_PX), Some(1));
}

#[test]
fn click_on_empty_map_hits_nothing() {
    let positions = [(100.0, 100.0), (300.0, 250.0)];

    assert_eq!(nearest_within(&positions, 500.0, 500.0, CLICK_TOLERANCE_PX), None);
    assert_eq!(nearest_within(&[], 100.0, 100.0, CLICK_TOLERANCE_PX), None);
}

#[test]
fn tolerance_boundary_is_inclusive() {
    let positions = [(100.0, 100.0)];

    assert_eq!(nearest_within(&positions, 110.0, 100.0, 10.0), Some(0));
    assert_eq!(nearest_within(&positions, 110.1, 100.0, 10.0), None);
}

#[test]
fn overlapping_markers_resolve_to_the_nearest() {
    let positions = [(100.0, 100.0), (104.0, 100.0)];

    assert_eq!(nearest_within(&positions, 103.0, 100.0, 10.0), Some(1));
    assert_eq!(nearest_within(&positions, 101.0, 100.0, 10.0), Some(0));
}
