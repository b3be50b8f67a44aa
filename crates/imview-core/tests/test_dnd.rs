mod common;

use std::path::PathBuf;

use imview_core::consts::IMAGE_EXTENSIONS;
use imview_core::io::{first_supported, parse_drop_list, pick_dropped};

use common::{write_bytes, write_test_png};

#[test]
fn test_parse_plain_list() {
    let paths = parse_drop_list("/tmp/b.png /tmp/a.jpg");
    assert_eq!(paths, vec![PathBuf::from("/tmp/a.jpg"), PathBuf::from("/tmp/b.png")]);
}

#[test]
fn test_parse_braced_names_with_spaces() {
    let paths = parse_drop_list("{/tmp/my pics/a.png} /tmp/b.jpg {/tmp/x y.tif}");
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/tmp/b.jpg"),
            PathBuf::from("/tmp/my pics/a.png"),
            PathBuf::from("/tmp/x y.tif"),
        ]
    );
}

#[test]
fn test_parse_adjacent_braces() {
    let paths = parse_drop_list("{C:/a b.png}{C:/c d.png}");
    assert_eq!(paths, vec![PathBuf::from("C:/a b.png"), PathBuf::from("C:/c d.png")]);
}

#[test]
fn test_parse_empty_payload() {
    assert!(parse_drop_list("").is_empty());
    assert!(parse_drop_list("   ").is_empty());
}

#[test]
fn test_first_supported_skips_dirs_and_other_types() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("folder.png");
    std::fs::create_dir(&folder).unwrap();
    let notes = write_bytes(dir.path(), "notes.txt", b"hello");
    let first = write_test_png(dir.path(), "b.png", 2, 2);
    let second = write_test_png(dir.path(), "c.png", 2, 2);
    let missing = dir.path().join("missing.png");

    let dropped = vec![folder, missing, notes, first.clone(), second];
    assert_eq!(first_supported(&dropped, &IMAGE_EXTENSIONS), Some(first));
}

#[test]
fn test_first_supported_none() {
    let dir = tempfile::tempdir().unwrap();
    let notes = write_bytes(dir.path(), "notes.txt", b"hello");
    assert_eq!(first_supported(&[notes], &IMAGE_EXTENSIONS), None);
    assert_eq!(first_supported::<PathBuf, &str>(&[], &IMAGE_EXTENSIONS), None);
}

#[test]
fn test_parse_then_pick() {
    let dir = tempfile::tempdir().unwrap();
    let spaced = dir.path().join("with space");
    std::fs::create_dir(&spaced).unwrap();
    let image = write_test_png(&spaced, "pic.png", 2, 2);

    let payload = format!("{{{}}} /nonexistent/zzz.png", image.display());
    let paths = parse_drop_list(&payload);
    assert_eq!(first_supported(&paths, &IMAGE_EXTENSIONS), Some(image));
}

#[test]
fn test_pick_dropped_sorts_before_picking() {
    let dir = tempfile::tempdir().unwrap();
    let b = write_test_png(dir.path(), "b.png", 2, 2);
    let a = write_test_png(dir.path(), "a.png", 2, 2);

    assert_eq!(pick_dropped(vec![b.clone(), a.clone()], &IMAGE_EXTENSIONS), Some(a));
    assert_eq!(pick_dropped(vec![b.clone()], &IMAGE_EXTENSIONS), Some(b));
    assert_eq!(pick_dropped(Vec::new(), &IMAGE_EXTENSIONS), None);
}

#[test]
fn test_pick_dropped_skips_unsupported_leaders() {
    let dir = tempfile::tempdir().unwrap();
    let notes = write_bytes(dir.path(), "a_notes.txt", b"hello");
    let image = write_test_png(dir.path(), "z.png", 2, 2);

    assert_eq!(pick_dropped(vec![image.clone(), notes], &IMAGE_EXTENSIONS), Some(image));
}
