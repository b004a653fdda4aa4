//! Command handlers
//!
//! Each handler runs one subcommand to completion and returns a process exit
//! code. Failures are logged and printed to stderr; the patch report goes to
//! stdout or to the file given with `-o`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::cli::commands::PatchArgs;
use crate::cli::output::OutputFormatter;
use crate::config::PbxpatchConfig;
use crate::patcher::{self, PatchOptions};

/// Handles the `patch` subcommand
pub fn handle_patch(args: &PatchArgs, quiet: bool) -> i32 {
    match run_patch(args, quiet) {
        Ok(()) => 0,
        Err(e) => {
            error!("patch failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_patch(args: &PatchArgs, quiet: bool) -> Result<()> {
    let project_path = resolve_project_path(args)?;
    debug!(path = %project_path.display(), "patching project file");

    let report = patcher::apply(&PatchOptions { project_path })?;

    let formatter = OutputFormatter::new(args.format.into());
    let rendered = formatter.format(&report)?;

    match &args.output {
        Some(file) => {
            fs::write(file, &rendered)
                .with_context(|| format!("Failed to write report to {}", file.display()))?;
            debug!(file = %file.display(), "report written");
        }
        None => {
            if !quiet {
                print!("{}", rendered);
            }
        }
    }

    Ok(())
}

/// CLI positional wins; otherwise the configured (env or default) path
fn resolve_project_path(args: &PatchArgs) -> Result<PathBuf> {
    if let Some(path) = &args.project_path {
        return Ok(path.clone());
    }

    let config = PbxpatchConfig::default();
    config.validate().context("Invalid configuration")?;
    Ok(config.project_path)
}
