use assert_fs::prelude::*;
use assert_fs::TempDir;
use bulk_image_mover::{relocate, ExtensionAllowList, RelocationOutcome};

#[test]
fn same_name_in_two_folders_gets_suffix() {
    let temp = TempDir::new().unwrap();
    let src = temp.child("src");
    src.child("a/photo.jpg").write_str("from a").unwrap();
    src.child("b/photo.jpg").write_str("from b").unwrap();
    let dst = temp.child("dst");

    let outcome = relocate(src.path(), dst.path(), None).unwrap();

    assert_eq!(outcome, RelocationOutcome { moved: 2, renamed: 1, skipped: 0 });
    dst.child("photo.jpg").assert("from a");
    dst.child("photo_1.jpg").assert("from b");
    assert!(!src.child("a/photo.jpg").path().exists());
    assert!(!src.child("b/photo.jpg").path().exists());
}

#[test]
fn existing_destination_names_push_counter_up() {
    let temp = TempDir::new().unwrap();
    let dst = temp.child("dst");
    dst.child("photo.jpg").write_str("old 0").unwrap();
    dst.child("photo_1.jpg").write_str("old 1").unwrap();
    let src = temp.child("src");
    src.child("a/photo.jpg").write_str("new").unwrap();

    let outcome = relocate(src.path(), dst.path(), None).unwrap();

    assert_eq!(outcome, RelocationOutcome { moved: 1, renamed: 1, skipped: 0 });
    dst.child("photo.jpg").assert("old 0");
    dst.child("photo_1.jpg").assert("old 1");
    dst.child("photo_2.jpg").assert("new");
}

#[test]
fn image_filter_leaves_other_files_in_place() {
    let temp = TempDir::new().unwrap();
    let src = temp.child("src");
    src.child("doc.txt").write_str("text").unwrap();
    src.child("pic.png").write_str("png").unwrap();
    let dst = temp.child("dst");
    let allow = ExtensionAllowList::images();

    let outcome = relocate(src.path(), dst.path(), Some(&allow)).unwrap();

    assert_eq!(outcome, RelocationOutcome { moved: 1, renamed: 0, skipped: 1 });
    dst.child("pic.png").assert("png");
    src.child("doc.txt").assert("text");
    assert!(!dst.child("doc.txt").path().exists());
}

#[test]
fn empty_source_still_creates_destination() {
    let temp = TempDir::new().unwrap();
    let src = temp.child("src");
    src.create_dir_all().unwrap();
    let dst = temp.child("deep/new/dst");

    let outcome = relocate(src.path(), dst.path(), None).unwrap();

    assert_eq!(outcome, RelocationOutcome::default());
    assert!(dst.path().is_dir());
}

#[test]
fn rerun_against_existing_destination_keeps_its_content() {
    let temp = TempDir::new().unwrap();
    let dst = temp.child("dst");
    dst.child("keep.gif").write_str("keep").unwrap();
    let src = temp.child("src");
    src.create_dir_all().unwrap();

    relocate(src.path(), dst.path(), None).unwrap();
    relocate(src.path(), dst.path(), None).unwrap();

    dst.child("keep.gif").assert("keep");
}

#[test]
fn original_file_named_like_a_suffix_shifts_the_sequence() {
    // Traversal is sorted: a/photo.jpg, b/photo_1.jpg, c/photo.jpg
    let temp = TempDir::new().unwrap();
    let src = temp.child("src");
    src.child("a/photo.jpg").write_str("a").unwrap();
    src.child("b/photo_1.jpg").write_str("b").unwrap();
    src.child("c/photo.jpg").write_str("c").unwrap();
    let dst = temp.child("dst");

    let outcome = relocate(src.path(), dst.path(), None).unwrap();

    assert_eq!(outcome, RelocationOutcome { moved: 3, renamed: 1, skipped: 0 });
    dst.child("photo.jpg").assert("a");
    dst.child("photo_1.jpg").assert("b");
    dst.child("photo_2.jpg").assert("c");
}

#[test]
fn destination_nested_in_source_is_not_reprocessed() {
    let temp = TempDir::new().unwrap();
    let src = temp.child("src");
    src.child("x/shot.webp").write_str("x").unwrap();
    src.child("out/shot.webp").write_str("already here").unwrap();
    let dst = src.child("out");

    let outcome = relocate(src.path(), dst.path(), None).unwrap();

    assert_eq!(outcome, RelocationOutcome { moved: 1, renamed: 1, skipped: 0 });
    dst.child("shot.webp").assert("already here");
    dst.child("shot_1.webp").assert("x");
}
