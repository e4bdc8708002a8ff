use std::{fs, thread::sleep, time::Duration};

use tempfile::tempdir;

#[test]
fn writes_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("decorator.log");

    tree_decorator::logging::init(true, Some(path.clone())).unwrap();
    tracing::info!("test");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("test"));
}

#[test]
fn level_follows_debug_flag() {
    assert_eq!(tree_decorator::logging::level_for(true), "debug");
    assert_eq!(tree_decorator::logging::level_for(false), "info");
}
