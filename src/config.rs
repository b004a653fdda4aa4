//! Configuration management for pbxpatch
//!
//! Settings load from environment variables with fixed defaults. The target
//! file path defaults to the DivinePrayers project descriptor the tool was
//! written against; the identifiers baked into the edit tables are only valid
//! for that file's current snapshot.
//!
//! # Environment Variables
//!
//! - `PBXPATCH_PROJECT_PATH`: path to the `project.pbxproj` to patch -
//!   default: the DivinePrayers project file
//! - `PBXPATCH_LOG_LEVEL`: logging level - default: "info"

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default target: the DivinePrayers project descriptor
pub const DEFAULT_PROJECT_PATH: &str =
    "/Users/madhurgrover/DivinePrayers/DivinePrayers.xcodeproj/project.pbxproj";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PBXPATCH_PROJECT_PATH is set but empty
    #[error("PBXPATCH_PROJECT_PATH is set but empty")]
    EmptyProjectPath,
}

/// Runtime configuration for pbxpatch
#[derive(Debug, Clone)]
pub struct PbxpatchConfig {
    /// Path to the project file to patch in place
    pub project_path: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for PbxpatchConfig {
    /// Loads configuration from environment variables with defaults
    fn default() -> Self {
        let project_path =
            env::var("PBXPATCH_PROJECT_PATH").unwrap_or_else(|_| DEFAULT_PROJECT_PATH.to_string());

        let log_level =
            env::var("PBXPATCH_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        PbxpatchConfig {
            project_path: PathBuf::from(project_path),
            log_level,
        }
    }
}

impl PbxpatchConfig {
    /// Validates the loaded configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyProjectPath);
        }
        Ok(())
    }
}
