use std::fs::{self, File};
use std::io::{Read, Write};
use tempfile::tempdir;
use zip::write::SimpleFileOptions;

use bulk_image_mover::{
    pack_directory, relocate, resolve_source, ExtensionAllowList, MoverError, SourceSpec,
};

fn write_zip(path: &std::path::Path, entries: &[(&str, &str)]) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    for (name, body) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

#[test]
fn zip_in_flat_zip_out() {
    let td = tempdir().unwrap();
    let input = td.path().join("shoot.zip");
    write_zip(
        &input,
        &[
            ("day1/IMG_0001.jpg", "d1"),
            ("day2/IMG_0001.jpg", "d2"),
            ("day2/readme.txt", "notes"),
        ],
    );

    let spec = SourceSpec::from_path(&input);
    assert_eq!(spec, SourceSpec::ZipArchive(input.clone()));
    let source = resolve_source(spec).unwrap();
    assert!(source.is_extracted());
    let scratch = source.path().to_path_buf();

    let dest = td.path().join("flat");
    let allow = ExtensionAllowList::images();
    let outcome = relocate(source.path(), &dest, Some(&allow)).unwrap();
    assert_eq!((outcome.moved, outcome.renamed, outcome.skipped), (2, 1, 1));

    let output = td.path().join("out").join("flat.zip");
    assert_eq!(pack_directory(&dest, &output).unwrap(), 2);

    let mut zip = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let mut names: Vec<String> = zip.file_names().map(str::to_owned).collect();
    names.sort();
    assert_eq!(names, vec!["IMG_0001.jpg", "IMG_0001_1.jpg"]);
    let mut body = String::new();
    zip.by_name("IMG_0001_1.jpg").unwrap().read_to_string(&mut body).unwrap();
    assert_eq!(body, "d2");

    drop(source);
    assert!(!scratch.exists(), "scratch space must be removed");
    assert!(input.exists(), "input archive is never modified");
}

#[test]
fn corrupt_zip_is_an_archive_error() {
    let td = tempdir().unwrap();
    let input = td.path().join("broken.zip");
    fs::write(&input, b"definitely not a zip").unwrap();

    let err = resolve_source(SourceSpec::from_path(&input)).unwrap_err();
    assert!(matches!(err.downcast_ref::<MoverError>(), Some(MoverError::Archive { .. })));
}

#[test]
fn missing_zip_is_source_not_found() {
    let td = tempdir().unwrap();
    let err = resolve_source(SourceSpec::from_path(td.path().join("gone.zip"))).unwrap_err();
    assert!(matches!(err.downcast_ref::<MoverError>(), Some(MoverError::SourceNotFound(_))));
}
