//! Markers and injected content
//!
//! Everything the rewriter matches on or emits is defined here. The triggers
//! and identifiers are hard-coded for one specific snapshot of the
//! DivinePrayers project file; they are not derived from parsing, so they stay
//! valid only as long as that file's structure and existing identifiers do.

use super::id::GeneratedIds;

/// Section markers emitted by Xcode around homogeneous object lists
pub const BUILD_FILE_SECTION_BEGIN: &str = "Begin PBXBuildFile section";
pub const FILE_REF_SECTION_BEGIN: &str = "Begin PBXFileReference section";

/// Known identifiers from the current project snapshot
pub const MAIN_GROUP_ID: &str = "DDED519A2D5E9F5C00AE9CD1";
pub const RESOURCES_PHASE_ID: &str = "DDED51A12D5E9F5C00AE9CD1";
pub const DEBUG_CONFIG_ID: &str = "DDED51C82D5E9F5D00AE9CD1";
pub const RELEASE_CONFIG_ID: &str = "DDED51C92D5E9F5D00AE9CD1";

/// Stale WorkingStoreKit file reference to be removed
pub const STALE_STOREKIT_ID: &str = "DD52E1FC2ECE39BC00F7AF95";

/// Record-type tag present on every file-reference line
pub const FILE_REFERENCE_ISA: &str = "PBXFileReference";

/// Inner triggers within a matched span
pub const CHILDREN_OPEN: &str = "children = (";
pub const FILES_OPEN: &str = "files = (";
pub const BUILD_SETTINGS_OPEN: &str = "buildSettings = {";

/// A span ends on the next line containing this token
pub const SPAN_END: &str = "};";

/// Build setting injected into both build configurations
pub const ENTITLEMENTS_SETTING_LINE: &str =
    "\t\t\t\tCODE_SIGN_ENTITLEMENTS = DivinePrayers/DivinePrayers.entitlements;\n";

/// Trigger for the main group record
pub fn main_group_trigger() -> String {
    format!("{} =", MAIN_GROUP_ID)
}

/// Trigger for the Resources build phase record
pub fn resources_phase_trigger() -> String {
    format!("{} /* Resources */ =", RESOURCES_PHASE_ID)
}

/// Trigger for the Debug build configuration record
pub fn debug_config_trigger() -> String {
    format!("{} /* Debug */ =", DEBUG_CONFIG_ID)
}

/// Trigger for the Release build configuration record
pub fn release_config_trigger() -> String {
    format!("{} /* Release */ =", RELEASE_CONFIG_ID)
}

/// PBXBuildFile entry placing Fresh.storekit in the Resources phase
pub fn build_file_line(ids: &GeneratedIds) -> String {
    format!(
        "\t\t{} /* Fresh.storekit in Resources */ = {{isa = PBXBuildFile; fileRef = {} /* Fresh.storekit */; }};\n",
        ids.storekit_build, ids.storekit_ref
    )
}

/// PBXFileReference entry for Fresh.storekit
pub fn storekit_reference_line(ids: &GeneratedIds) -> String {
    format!(
        "\t\t{} /* Fresh.storekit */ = {{isa = PBXFileReference; lastKnownFileType = text; name = Fresh.storekit; path = DivinePrayers/StoreKit/Fresh.storekit; sourceTree = \"<group>\"; }};\n",
        ids.storekit_ref
    )
}

/// PBXFileReference entry for DivinePrayers.entitlements
pub fn entitlements_reference_line(ids: &GeneratedIds) -> String {
    format!(
        "\t\t{} /* DivinePrayers.entitlements */ = {{isa = PBXFileReference; lastKnownFileType = text.plist.entitlements; name = DivinePrayers.entitlements; path = DivinePrayers/DivinePrayers.entitlements; sourceTree = \"<group>\"; }};\n",
        ids.entitlements_ref
    )
}

/// Main-group child entry for Fresh.storekit
pub fn storekit_child_line(ids: &GeneratedIds) -> String {
    format!("\t\t\t\t{} /* Fresh.storekit */,\n", ids.storekit_ref)
}

/// Main-group child entry for DivinePrayers.entitlements
pub fn entitlements_child_line(ids: &GeneratedIds) -> String {
    format!(
        "\t\t\t\t{} /* DivinePrayers.entitlements */,\n",
        ids.entitlements_ref
    )
}

/// Resources-phase files entry for the new build file
pub fn resources_entry_line(ids: &GeneratedIds) -> String {
    format!(
        "\t\t\t\t{} /* Fresh.storekit in Resources */,\n",
        ids.storekit_build
    )
}
