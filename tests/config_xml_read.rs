use bulk_image_mover::{load_config_from_xml_path, ExtensionAllowList, LogLevel};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn reads_all_fields_and_trims_whitespace() {
    let td = tempdir().unwrap();
    let p = td.path().join("config.xml");
    fs::write(
        &p,
        r#"<config>
  <source>
      /photos/in
  </source>
  <destination> /photos/flat </destination>
  <output_archive>/photos/flat.zip</output_archive>
  <images_only> yes </images_only>
  <image_extensions>jpg, .PNG heic</image_extensions>
  <log_level> Debug </log_level>
  <log_file>/var/log/bim.log</log_file>
</config>"#,
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&p).unwrap();
    assert_eq!(cfg.source, Some(PathBuf::from("/photos/in")));
    assert_eq!(cfg.destination, Some(PathBuf::from("/photos/flat")));
    assert_eq!(cfg.output_archive, Some(PathBuf::from("/photos/flat.zip")));
    assert!(cfg.images_only);
    assert_eq!(cfg.image_extensions, ExtensionAllowList::from_iter(["jpg", "png", "heic"]));
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/bim.log")));
}

#[test]
fn missing_elements_fall_back_to_defaults() {
    let td = tempdir().unwrap();
    let p = td.path().join("config.xml");
    fs::write(&p, "<config><destination>/out</destination></config>").unwrap();
    let cfg = load_config_from_xml_path(&p).unwrap();
    assert!(cfg.source.is_none());
    assert!(!cfg.images_only);
    assert_eq!(cfg.image_extensions, ExtensionAllowList::images());
    assert_eq!(cfg.log_level, LogLevel::Normal);
}

#[test]
fn unknown_element_is_rejected() {
    let td = tempdir().unwrap();
    let p = td.path().join("config.xml");
    fs::write(&p, "<config><destinaton>/out</destinaton></config>").unwrap();
    assert!(load_config_from_xml_path(&p).is_err());
}

#[test]
fn malformed_xml_is_an_error() {
    let td = tempdir().unwrap();
    let p = td.path().join("config.xml");
    fs::write(&p, "<config><source>/in</config>").unwrap();
    let err = load_config_from_xml_path(&p).unwrap_err();
    assert!(format!("{err:#}").contains("parse config xml"), "{err:#}");
}

#[test]
fn invalid_log_level_is_an_error() {
    let td = tempdir().unwrap();
    let p = td.path().join("config.xml");
    fs::write(&p, "<config><log_level>loud</log_level></config>").unwrap();
    assert!(load_config_from_xml_path(&p).is_err());
}
