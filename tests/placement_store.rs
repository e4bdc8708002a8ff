use tree_decorator::decor::{KindId, Point, PlacementStore};

#[test]
fn add_then_remove_by_handle_restores_size() {
    let mut store = PlacementStore::seeded(10.0, 42);
    store.add(KindId(0), Point::new(10.0, 10.0));
    let before = store.len();

    let handle = store.add(KindId(1), Point::new(250.0, 380.0));
    let removed = store.remove_by_handle(handle).expect("item should exist");

    assert_eq!(removed.handle, handle);
    assert_eq!(store.len(), before);
}

#[test]
fn removing_unknown_handle_reports_not_found() {
    let mut store = PlacementStore::seeded(0.0, 1);
    let handle = store.add(KindId(0), Point::new(0.0, 0.0));
    assert!(store.remove_by_handle(handle).is_some());
    assert!(store.remove_by_handle(handle).is_none());
    assert!(store.is_empty());
}

#[test]
fn same_point_twice_gives_distinct_handles_and_positions() {
    let mut store = PlacementStore::seeded(10.0, 1234);
    let at = Point::new(250.0, 380.0);
    let first = store.add(KindId(0), at);
    let second = store.add(KindId(0), at);

    assert_ne!(first, second);
    let a = store.get(first).unwrap().position;
    let b = store.get(second).unwrap().position;
    assert_ne!(a, b);
}

#[test]
fn handles_are_not_reused_after_removal() {
    let mut store = PlacementStore::seeded(0.0, 1);
    let first = store.add(KindId(0), Point::new(0.0, 0.0));
    store.remove_by_handle(first);
    let second = store.add(KindId(0), Point::new(0.0, 0.0));
    assert_ne!(first, second);
}

#[test]
fn remove_nearest_takes_only_the_closest_item() {
    let mut store = PlacementStore::seeded(0.0, 1);
    let far = store.add(KindId(0), Point::new(100.0, 100.0));
    let near = store.add(KindId(1), Point::new(105.0, 100.0));
    let other = store.add(KindId(2), Point::new(300.0, 300.0));

    let removed = store.remove_nearest(Point::new(104.0, 100.0), 15.0);

    assert_eq!(removed.map(|item| item.handle), Some(near));
    assert_eq!(store.len(), 2);
    assert!(store.get(far).is_some());
    assert!(store.get(other).is_some());
}

#[test]
fn remove_nearest_respects_tolerance() {
    let mut store = PlacementStore::seeded(0.0, 1);
    store.add(KindId(0), Point::new(100.0, 100.0));

    assert!(store.remove_nearest(Point::new(130.0, 100.0), 15.0).is_none());
    assert_eq!(store.len(), 1);
    assert!(store.remove_nearest(Point::new(115.0, 100.0), 15.0).is_some());
    assert!(store.is_empty());
}

#[test]
fn remove_nearest_on_empty_store_is_a_no_op() {
    let mut store = PlacementStore::seeded(0.0, 1);
    assert!(store.remove_nearest(Point::new(0.0, 0.0), 100.0).is_none());
}

#[test]
fn clear_empties_the_store() {
    let mut store = PlacementStore::seeded(5.0, 9);
    for i in 0..5 {
        store.add(KindId(i), Point::new(250.0, 380.0));
    }
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.iter().count(), 0);
}
