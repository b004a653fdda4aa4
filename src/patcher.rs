//! File orchestration
//!
//! Reads the project file, runs the rewrite in memory, and overwrites the
//! same path with the result. There is no backup, no dry-run, and no
//! transactional guarantee; an interruption mid-write leaves the file
//! partially written.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::pbxproj::{rewrite, GeneratedIds, PatchReport};

/// Errors from reading or writing the project file
#[derive(Debug, Error)]
pub enum PatchError {
    /// The project file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rewritten content could not be written back
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options for a patch run
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Path to the `project.pbxproj` file to patch in place
    pub project_path: PathBuf,
}

/// Patches the project file in place and returns the run report
///
/// Missing triggers are logged at warn level and otherwise ignored; the only
/// hard failures are I/O errors on the file itself.
pub fn apply(options: &PatchOptions) -> Result<PatchReport, PatchError> {
    let path = &options.project_path;

    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.clone(),
        source,
    })?;

    let ids = GeneratedIds::generate();
    info!(
        storekit_ref = %ids.storekit_ref,
        entitlements_ref = %ids.entitlements_ref,
        storekit_build = %ids.storekit_build,
        "generated object identifiers"
    );

    let (patched, mut report) = rewrite(&content, &ids);
    report.project_path = path.display().to_string();

    for edit in report.missing_edits() {
        warn!(edit, path = %path.display(), "trigger not found, insertion skipped");
    }

    fs::write(path, &patched).map_err(|source| PatchError::Write {
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        inserted = report.lines_inserted(),
        removed = report.stale_lines_removed,
        "project file patched"
    );

    Ok(report)
}

/// Convenience wrapper taking a bare path
pub fn apply_to_path(path: &Path) -> Result<PatchReport, PatchError> {
    apply(&PatchOptions {
        project_path: path.to_path_buf(),
    })
}
