use bulk_image_mover::cli::Args;
use bulk_image_mover::{Config, ExtensionAllowList, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn positional_source_and_destination() {
    let args = Args::parse_from(["bulk_image_mover", "/in", "/out"]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.source, Some(PathBuf::from("/in")));
    assert_eq!(cfg.destination, Some(PathBuf::from("/out")));
    assert!(!cfg.images_only);
}

#[test]
fn cli_values_override_config_file_values() {
    let mut cfg = Config::new("/cfg/in", "/cfg/out");
    cfg.log_level = LogLevel::Quiet;
    let args = Args::parse_from(["bulk_image_mover", "/cli/in", "--log-level", "info"]);
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.source, Some(PathBuf::from("/cli/in")));
    assert_eq!(cfg.destination, Some(PathBuf::from("/cfg/out")), "unset flag keeps config value");
    assert_eq!(cfg.log_level, LogLevel::Info);
}

#[test]
fn ext_implies_images_only_with_custom_list() {
    let args = Args::parse_from(["bulk_image_mover", "in", "out", "--ext", "JPG,.heic"]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert!(cfg.images_only);
    assert_eq!(cfg.image_extensions, ExtensionAllowList::from_iter([".jpg", ".heic"]));
}

#[test]
fn images_only_flag_keeps_default_list() {
    let args = Args::parse_from(["bulk_image_mover", "-i", "in", "out"]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert!(cfg.images_only);
    assert_eq!(cfg.image_extensions, ExtensionAllowList::images());
}

#[test]
fn debug_flag_beats_log_level() {
    let args = Args::parse_from(["bulk_image_mover", "-d", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
}

#[test]
fn output_archive_without_destination() {
    let args = Args::parse_from(["bulk_image_mover", "photos.zip", "-o", "flat.zip"]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.output_archive, Some(PathBuf::from("flat.zip")));
    assert!(cfg.destination.is_none());
}

#[test]
fn quoted_path_is_sanitized() {
    let args = Args::parse_from(["bulk_image_mover", "\"/in/\"", "'/out'"]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.source, Some(PathBuf::from("/in")));
    assert_eq!(cfg.destination, Some(PathBuf::from("/out")));
}

#[test]
fn print_and_init_config_conflict() {
    assert!(Args::try_parse_from(["bulk_image_mover", "--print-config", "--init-config"]).is_err());
}
