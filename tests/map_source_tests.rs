use route_finder::adapters::outbound::FilesystemMapSource;
use route_finder::common::DomainError;
use route_finder::domains::route_map::*;
use std::fs;
use tempfile::tempdir;

const TINY: &str = "Tiny\n3\nA 0 0\nB 10 0\nC 10 10\n2\nA B 10\nB C 10\n";

#[test]
fn test_loads_map_text_from_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tiny.txt"), TINY).unwrap();
    let source = FilesystemMapSource::new(Some(dir.path().to_path_buf()));

    let text = source.load_map_text("tiny.txt").unwrap();
    let map = parse_map(&text).unwrap();

    assert_eq!(source.base(), dir.path());
    assert_eq!(map.name, "Tiny");
    assert_eq!(map.graph.len(), 3);
}

#[test]
fn test_missing_file_is_map_file_not_found() {
    let dir = tempdir().unwrap();
    let source = FilesystemMapSource::new(Some(dir.path().to_path_buf()));

    match source.load_map_text("nowhere.txt") {
        Err(DomainError::MapFileNotFound { path }) => assert!(path.ends_with("nowhere.txt")),
        other => panic!("Expected MapFileNotFound, got {:?}", other),
    }
}

#[test]
fn test_lists_only_text_files_sorted() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("zeta.txt"), TINY).unwrap();
    fs::write(dir.path().join("alpha.txt"), TINY).unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();
    let source = FilesystemMapSource::new(Some(dir.path().to_path_buf()));

    assert_eq!(source.list_maps().unwrap(), vec!["alpha.txt", "zeta.txt"]);
}

#[test]
fn test_missing_directory_lists_nothing() {
    let dir = tempdir().unwrap();
    let source = FilesystemMapSource::new(Some(dir.path().join("absent")));
    assert!(source.list_maps().unwrap().is_empty());
}

#[test]
fn test_bundled_map_files_parse() {
    let source = FilesystemMapSource::new(Some("resources/maps".into()));
    let names = source.list_maps().unwrap();
    assert_eq!(names, vec!["islands.txt", "tiny.txt"]);

    for name in names {
        let text = source.load_map_text(&name).unwrap();
        assert!(parse_map(&text).is_ok(), "{} should parse", name);
    }
}
