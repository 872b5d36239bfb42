//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the request, resolves
//! the source, runs the relocation and optionally packs the result.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use bulk_image_mover::cli::Args;
use bulk_image_mover::config::{create_template_config, load_config};
use bulk_image_mover::output as out;
use bulk_image_mover::{
    default_config_path, pack_directory, relocate_with, resolve_source, Config, MoverError,
    CONFIG_ENV_VAR,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    if args.init_config {
        let path = default_config_path()
            .context("could not determine a config location; set BULK_IMAGE_MOVER_CONFIG")?;
        create_template_config(&path)?;
        out::print_success(&format!("Template config written to: {}", path.display()));
        return Ok(());
    }

    // Config file first, CLI flags on top.
    let mut cfg = load_config()?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    // Held until the end of run() so the file writer flushes.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting bulk_image_mover: {:?}", args);

    execute(&cfg, args.verbose).inspect_err(log_failure)
}

fn print_config_location() {
    if let Some(p) = std::env::var_os(CONFIG_ENV_VAR) {
        out::print_info(&format!(
            "Using {CONFIG_ENV_VAR} (explicit):\n  {}",
            PathBuf::from(p).display()
        ));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file there yet. Run with --init-config to create a template.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}

/// One complete run: resolve input, relocate, package, report.
fn execute(cfg: &Config, verbose: bool) -> Result<()> {
    let plan = cfg.validate()?;
    let filtering = plan.filter.is_some();

    // Scratch space is owned here and removed on every exit path.
    let source = resolve_source(plan.source)?;
    if let Some(archive) = source.archive() {
        debug!(archive = %archive.display(), root = %source.path().display(), "Relocating from extracted archive");
    }
    let scratch_out = match &plan.destination {
        Some(_) => None,
        None => Some(
            tempfile::Builder::new()
                .prefix("bulk_image_mover.out.")
                .tempdir()
                .context("create scratch destination")?,
        ),
    };
    let destination = match (&plan.destination, &scratch_out) {
        (Some(d), _) => d.clone(),
        (None, Some(t)) => t.path().to_path_buf(),
        (None, None) => return Err(MoverError::MissingDestination.into()),
    };

    let outcome = relocate_with(source.path(), &destination, plan.filter.as_ref(), |ev| {
        if verbose {
            out::print_event(ev);
        }
    })?;

    if let Some(archive) = source.archive()
        && outcome.skipped > 0
    {
        warn!(
            archive = %archive.display(),
            skipped = outcome.skipped,
            "Skipped files stay inside the extracted archive and are discarded with it"
        );
    }

    let archive = match &plan.output_archive {
        Some(path) => {
            let entries = pack_directory(&destination, path)?;
            info!(archive = %path.display(), entries, "Packaged destination");
            Some(path.as_path())
        }
        None => None,
    };

    info!(
        moved = outcome.moved,
        renamed = outcome.renamed,
        skipped = outcome.skipped,
        "Run completed"
    );
    out::print_outcome(&outcome, filtering, archive);
    Ok(())
}

fn log_failure(e: &anyhow::Error) {
    match e.downcast_ref::<MoverError>() {
        Some(me @ (MoverError::MissingSource | MoverError::MissingDestination)) => {
            error!(code = me.code(), kind = me.kind(), "{me}");
            out::print_warn("Please provide both a source and a destination (a .zip source may use --output-archive alone).");
        }
        Some(me @ MoverError::Move { src, dest, message }) => {
            error!(
                code = me.code(),
                kind = me.kind(),
                src = %src.display(),
                dest = %dest.display(),
                %message,
                "Move failed; files moved before this one stay moved"
            );
        }
        Some(me) => error!(code = me.code(), kind = me.kind(), "{me}"),
        None => error!(error = ?e, "Run failed"),
    }
}
