//! Patch report
//!
//! Summary of what a single rewrite pass did: the identifiers it minted and
//! how many lines each edit inserted or removed. The report is serializable
//! for the CLI's JSON/YAML output.

use serde::Serialize;

use super::id::GeneratedIds;

/// Result of one rewrite pass over a project file
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    /// Path of the patched file (filled in by the patcher)
    pub project_path: String,

    /// Generated identifier for the Fresh.storekit file reference
    pub storekit_ref_id: String,

    /// Generated identifier for the DivinePrayers.entitlements file reference
    pub entitlements_ref_id: String,

    /// Generated identifier for the Fresh.storekit build-file entry
    pub storekit_build_id: String,

    /// PBXBuildFile lines inserted (expected: 1)
    pub build_file_entries: u32,

    /// PBXFileReference lines inserted (expected: 2)
    pub file_references: u32,

    /// Main-group children lines inserted (expected: 2)
    pub group_children: u32,

    /// Resources-phase files lines inserted (expected: 1)
    pub resources_entries: u32,

    /// CODE_SIGN_ENTITLEMENTS lines inserted into Debug (expected: 1)
    pub debug_settings: u32,

    /// CODE_SIGN_ENTITLEMENTS lines inserted into Release (expected: 1)
    pub release_settings: u32,

    /// Stale WorkingStoreKit lines dropped
    pub stale_lines_removed: u32,

    /// Line count of the input document
    pub lines_in: u32,

    /// Line count of the output document
    pub lines_out: u32,
}

impl PatchReport {
    /// Creates an empty report carrying the run's generated identifiers
    pub fn new(ids: &GeneratedIds) -> Self {
        PatchReport {
            project_path: String::new(),
            storekit_ref_id: ids.storekit_ref.to_string(),
            entitlements_ref_id: ids.entitlements_ref.to_string(),
            storekit_build_id: ids.storekit_build.to_string(),
            build_file_entries: 0,
            file_references: 0,
            group_children: 0,
            resources_entries: 0,
            debug_settings: 0,
            release_settings: 0,
            stale_lines_removed: 0,
            lines_in: 0,
            lines_out: 0,
        }
    }

    /// Total lines inserted across all edits
    pub fn lines_inserted(&self) -> u32 {
        self.build_file_entries
            + self.file_references
            + self.group_children
            + self.resources_entries
            + self.debug_settings
            + self.release_settings
    }

    /// Names of insertion edits that never fired
    ///
    /// A missing trigger means the marker was absent from the input; per the
    /// tool's contract that is logged, never treated as an error.
    pub fn missing_edits(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.build_file_entries == 0 {
            missing.push("build-file entry");
        }
        if self.file_references == 0 {
            missing.push("file references");
        }
        if self.group_children == 0 {
            missing.push("group children");
        }
        if self.resources_entries == 0 {
            missing.push("resources-phase entry");
        }
        if self.debug_settings == 0 {
            missing.push("debug entitlements setting");
        }
        if self.release_settings == 0 {
            missing.push("release entitlements setting");
        }
        missing
    }
}
