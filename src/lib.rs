//! pbxpatch - line-oriented patcher for the DivinePrayers project descriptor
//!
//! This library rewrites one specific `project.pbxproj` snapshot: it registers
//! `Fresh.storekit` and `DivinePrayers.entitlements` as file references, adds
//! them to the main group, places the storekit file in the Resources build
//! phase, removes the stale `WorkingStoreKit` reference, and injects a
//! `CODE_SIGN_ENTITLEMENTS` setting into the Debug and Release configurations.
//!
//! # Core Concepts
//!
//! - **Line rewriter**: a single sequential pass over the file's lines,
//!   driven by substring triggers and per-span flags; no grammar, no tree
//! - **Object identifiers**: 24-character uppercase hex tokens minted fresh
//!   per run from v4 UUIDs
//! - **Patch report**: per-edit insertion/removal counts and the generated
//!   identifiers, serializable for machine consumption
//!
//! The transform is deliberately narrow: the triggers are hard-coded for the
//! project's current snapshot, a missing trigger silently skips that edit,
//! and running twice duplicates every insertion.
//!
//! # Example Usage
//!
//! ```no_run
//! use pbxpatch::patcher::{apply, PatchOptions};
//! use std::path::PathBuf;
//!
//! fn patch_project() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = apply(&PatchOptions {
//!         project_path: PathBuf::from("DivinePrayers.xcodeproj/project.pbxproj"),
//!     })?;
//!
//!     println!("inserted {} lines", report.lines_inserted());
//!     println!("removed {} stale lines", report.stale_lines_removed);
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`pbxproj`]: identifier minting, edit tables, and the line rewriter
//! - [`patcher`]: read / rewrite / overwrite orchestration
//! - [`cli`]: clap commands, handlers, and report formatting

// Public modules
pub mod cli;
pub mod config;
pub mod patcher;
pub mod pbxproj;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, PbxpatchConfig};
pub use patcher::{apply, apply_to_path, PatchError, PatchOptions};
pub use pbxproj::{GeneratedIds, ObjectId, PatchReport};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
