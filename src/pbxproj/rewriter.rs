//! Single-pass line rewriter
//!
//! Walks the document once, keeping a flag per open span (main group,
//! Resources phase, Debug and Release configurations). Matching is purely
//! textual substring containment; there is no grammar. Insertions are emitted
//! immediately after their trigger line, stale lines are dropped, and every
//! other line copies through byte-for-byte in its original order.
//!
//! A span opens on its trigger line and closes on the next line containing
//! `};`, so reordered or malformed input silently produces wrong output
//! rather than an error. Running the pass twice duplicates every insertion.

use tracing::{debug, trace};

use super::edits;
use super::id::GeneratedIds;
use super::report::PatchReport;

/// Rewrites the document, returning the new content and a report
///
/// Lines are split newline-inclusive so the untouched portion of the output
/// is byte-identical to the input, including a final line with no trailing
/// newline.
pub fn rewrite(content: &str, ids: &GeneratedIds) -> (String, PatchReport) {
    let mut report = PatchReport::new(ids);
    let mut out = String::with_capacity(content.len() + 1024);

    let main_group = edits::main_group_trigger();
    let resources_phase = edits::resources_phase_trigger();
    let debug_config = edits::debug_config_trigger();
    let release_config = edits::release_config_trigger();

    let mut in_group = false;
    let mut in_resources = false;
    let mut in_debug = false;
    let mut in_release = false;

    for (lineno, line) in content.split_inclusive('\n').enumerate() {
        report.lines_in += 1;

        // New object sections: insert immediately after the begin marker.
        if line.contains(edits::BUILD_FILE_SECTION_BEGIN) {
            debug!(line = lineno + 1, "inserting PBXBuildFile entry");
            emit(&mut out, &mut report.lines_out, line);
            emit(&mut out, &mut report.lines_out, &edits::build_file_line(ids));
            report.build_file_entries += 1;
            continue;
        }
        if line.contains(edits::FILE_REF_SECTION_BEGIN) {
            debug!(line = lineno + 1, "inserting PBXFileReference entries");
            emit(&mut out, &mut report.lines_out, line);
            emit(
                &mut out,
                &mut report.lines_out,
                &edits::storekit_reference_line(ids),
            );
            emit(
                &mut out,
                &mut report.lines_out,
                &edits::entitlements_reference_line(ids),
            );
            report.file_references += 2;
            continue;
        }

        // Stale WorkingStoreKit file reference goes away wherever it appears.
        if line.contains(edits::STALE_STOREKIT_ID) && line.contains(edits::FILE_REFERENCE_ISA) {
            debug!(line = lineno + 1, "dropping stale WorkingStoreKit reference");
            report.stale_lines_removed += 1;
            continue;
        }

        // Main group: register both new files as children, drop the stale one.
        if line.contains(&main_group) {
            trace!(line = lineno + 1, "entering main group span");
            in_group = true;
        }
        if in_group && line.contains(edits::CHILDREN_OPEN) {
            debug!(line = lineno + 1, "inserting main-group children");
            emit(&mut out, &mut report.lines_out, line);
            emit(&mut out, &mut report.lines_out, &edits::storekit_child_line(ids));
            emit(
                &mut out,
                &mut report.lines_out,
                &edits::entitlements_child_line(ids),
            );
            report.group_children += 2;
            continue;
        }
        if in_group && line.contains(edits::STALE_STOREKIT_ID) {
            debug!(line = lineno + 1, "dropping stale group child");
            report.stale_lines_removed += 1;
            continue;
        }
        if in_group && line.contains(edits::SPAN_END) {
            in_group = false;
        }

        // Resources build phase: include the new build file.
        if line.contains(&resources_phase) {
            trace!(line = lineno + 1, "entering Resources phase span");
            in_resources = true;
        }
        if in_resources && line.contains(edits::FILES_OPEN) {
            debug!(line = lineno + 1, "inserting Resources phase entry");
            emit(&mut out, &mut report.lines_out, line);
            emit(&mut out, &mut report.lines_out, &edits::resources_entry_line(ids));
            report.resources_entries += 1;
            continue;
        }
        if in_resources && line.contains(edits::SPAN_END) {
            in_resources = false;
        }

        // Debug configuration: point code signing at the entitlements file.
        if line.contains(&debug_config) {
            trace!(line = lineno + 1, "entering Debug configuration span");
            in_debug = true;
        }
        if in_debug && line.contains(edits::BUILD_SETTINGS_OPEN) {
            debug!(line = lineno + 1, "inserting Debug entitlements setting");
            emit(&mut out, &mut report.lines_out, line);
            emit(&mut out, &mut report.lines_out, edits::ENTITLEMENTS_SETTING_LINE);
            report.debug_settings += 1;
            continue;
        }
        if in_debug && line.contains(edits::SPAN_END) {
            in_debug = false;
        }

        // Release configuration: same setting.
        if line.contains(&release_config) {
            trace!(line = lineno + 1, "entering Release configuration span");
            in_release = true;
        }
        if in_release && line.contains(edits::BUILD_SETTINGS_OPEN) {
            debug!(line = lineno + 1, "inserting Release entitlements setting");
            emit(&mut out, &mut report.lines_out, line);
            emit(&mut out, &mut report.lines_out, edits::ENTITLEMENTS_SETTING_LINE);
            report.release_settings += 1;
            continue;
        }
        if in_release && line.contains(edits::SPAN_END) {
            in_release = false;
        }

        emit(&mut out, &mut report.lines_out, line);
    }

    (out, report)
}

fn emit(out: &mut String, lines_out: &mut u32, line: &str) {
    out.push_str(line);
    *lines_out += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite_str(input: &str) -> (String, PatchReport, GeneratedIds) {
        let ids = GeneratedIds::generate();
        let (out, report) = rewrite(input, &ids);
        (out, report, ids)
    }

    #[test]
    fn test_build_file_section_gains_one_entry() {
        let input = "/* Begin PBXBuildFile section */\n/* End PBXBuildFile section */\n";
        let (out, report, ids) = rewrite_str(input);
        assert_eq!(report.build_file_entries, 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains(ids.storekit_build.as_str()));
        assert!(lines[1].contains("isa = PBXBuildFile"));
    }

    #[test]
    fn test_file_reference_section_gains_two_entries() {
        let input = "/* Begin PBXFileReference section */\n/* End PBXFileReference section */\n";
        let (out, report, ids) = rewrite_str(input);
        assert_eq!(report.file_references, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains(ids.storekit_ref.as_str()));
        assert!(lines[1].contains("Fresh.storekit"));
        assert!(lines[2].contains(ids.entitlements_ref.as_str()));
        assert!(lines[2].contains("DivinePrayers.entitlements"));
        assert_eq!(lines[3], "/* End PBXFileReference section */");
    }

    #[test]
    fn test_stale_reference_dropped_anywhere() {
        let input = "\t\tDD52E1FC2ECE39BC00F7AF95 /* WorkingStoreKit */ = {isa = PBXFileReference; path = old; };\n\t\tkeep this line\n";
        let (out, report, _) = rewrite_str(input);
        assert_eq!(report.stale_lines_removed, 1);
        assert!(!out.contains("DD52E1FC2ECE39BC00F7AF95"));
        assert!(out.contains("keep this line"));
    }

    #[test]
    fn test_stale_id_outside_file_reference_survives() {
        // Without the PBXFileReference tag the line is only dropped inside
        // the main-group span.
        let input = "\t\tDD52E1FC2ECE39BC00F7AF95 /* WorkingStoreKit in Resources */ = {isa = PBXBuildFile; };\n";
        let (out, report, _) = rewrite_str(input);
        assert_eq!(report.stale_lines_removed, 0);
        assert!(out.contains("DD52E1FC2ECE39BC00F7AF95"));
    }

    #[test]
    fn test_main_group_children_and_stale_child() {
        let input = concat!(
            "\t\tDDED519A2D5E9F5C00AE9CD1 = {\n",
            "\t\t\tisa = PBXGroup;\n",
            "\t\t\tchildren = (\n",
            "\t\t\t\tDD52E1FC2ECE39BC00F7AF95 /* WorkingStoreKit */,\n",
            "\t\t\t\tAAAA00000000000000000000 /* App.swift */,\n",
            "\t\t\t);\n",
            "\t\t};\n",
            "\t\tchildren = (\n",
        );
        let (out, report, ids) = rewrite_str(input);
        assert_eq!(report.group_children, 2);
        assert_eq!(report.stale_lines_removed, 1);
        assert!(!out.contains("WorkingStoreKit"));

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[3].contains(ids.storekit_ref.as_str()));
        assert!(lines[4].contains(ids.entitlements_ref.as_str()));
        // The span closed on "};", so the trailing "children = (" outside the
        // group is left alone.
        assert_eq!(lines.last().unwrap(), &"\t\tchildren = (");
    }

    #[test]
    fn test_resources_phase_gains_entry() {
        let input = concat!(
            "\t\tDDED51A12D5E9F5C00AE9CD1 /* Resources */ = {\n",
            "\t\t\tisa = PBXResourcesBuildPhase;\n",
            "\t\t\tfiles = (\n",
            "\t\t\t);\n",
            "\t\t};\n",
        );
        let (out, report, ids) = rewrite_str(input);
        assert_eq!(report.resources_entries, 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[3],
            format!("\t\t\t\t{} /* Fresh.storekit in Resources */,", ids.storekit_build)
        );
    }

    #[test]
    fn test_both_configs_gain_entitlements_setting() {
        let input = concat!(
            "\t\tDDED51C82D5E9F5D00AE9CD1 /* Debug */ = {\n",
            "\t\t\tisa = XCBuildConfiguration;\n",
            "\t\t\tbuildSettings = {\n",
            "\t\t\t};\n",
            "\t\t};\n",
            "\t\tDDED51C92D5E9F5D00AE9CD1 /* Release */ = {\n",
            "\t\t\tisa = XCBuildConfiguration;\n",
            "\t\t\tbuildSettings = {\n",
            "\t\t\t};\n",
            "\t\t};\n",
        );
        let (out, report, _) = rewrite_str(input);
        assert_eq!(report.debug_settings, 1);
        assert_eq!(report.release_settings, 1);
        assert_eq!(
            out.matches("CODE_SIGN_ENTITLEMENTS = DivinePrayers/DivinePrayers.entitlements;")
                .count(),
            2
        );
    }

    #[test]
    fn test_build_settings_outside_config_spans_untouched() {
        let input = "\t\t\tbuildSettings = {\n\t\t\t};\n";
        let (out, report, _) = rewrite_str(input);
        assert_eq!(report.debug_settings, 0);
        assert_eq!(report.release_settings, 0);
        assert_eq!(out, input);
    }

    #[test]
    fn test_unmatched_input_copies_through() {
        let input = "// !$*UTF8*$!\n{\n\tarchiveVersion = 1;\n}\n";
        let (out, report, _) = rewrite_str(input);
        assert_eq!(out, input);
        assert_eq!(report.lines_inserted(), 0);
        assert_eq!(report.missing_edits().len(), 6);
        assert_eq!(report.lines_in, 4);
        assert_eq!(report.lines_out, 4);
    }

    #[test]
    fn test_final_line_without_newline_round_trips() {
        let input = "first line\nlast line without newline";
        let (out, _, _) = rewrite_str(input);
        assert_eq!(out, input);
    }

    #[test]
    fn test_second_pass_duplicates_insertions() {
        // Known limitation: the transform is not idempotent.
        let input = "/* Begin PBXBuildFile section */\n/* End PBXBuildFile section */\n";
        let ids = GeneratedIds::generate();
        let (once, _) = rewrite(input, &ids);
        let (twice, report) = rewrite(&once, &ids);
        assert_eq!(report.build_file_entries, 1);
        assert_eq!(twice.matches("isa = PBXBuildFile").count(), 2);
    }
}
