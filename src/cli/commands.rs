use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Line-oriented patcher for the DivinePrayers Xcode project descriptor
#[derive(Parser, Debug)]
#[command(
    name = "pbxpatch",
    about = "Registers Fresh.storekit and DivinePrayers.entitlements in the DivinePrayers project file",
    version,
    long_about = "pbxpatch rewrites a project.pbxproj in place: it inserts a build-file entry \
                  and two file references for Fresh.storekit and DivinePrayers.entitlements, \
                  adds them to the main group and the Resources phase, removes the stale \
                  WorkingStoreKit reference, and sets CODE_SIGN_ENTITLEMENTS in the Debug and \
                  Release configurations. Matching is textual and tied to one project snapshot; \
                  the edit is not idempotent."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug output")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Patch a project.pbxproj in place",
        long_about = "Applies the full edit set to the given project file, overwriting it.\n\n\
                      Examples:\n  \
                      pbxpatch patch\n  \
                      pbxpatch patch /path/to/project.pbxproj\n  \
                      pbxpatch patch --format json -o report.json"
    )]
    Patch(PatchArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct PatchArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project.pbxproj (defaults to PBXPATCH_PROJECT_PATH or the DivinePrayers project)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the report to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        // Verify that CLI structure is valid
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_patch_args() {
        let args = CliArgs::parse_from(["pbxpatch", "patch"]);
        match args.command {
            Commands::Patch(patch_args) => {
                assert!(patch_args.project_path.is_none());
                assert_eq!(patch_args.format, OutputFormatArg::Human);
                assert!(patch_args.output.is_none());
            }
        }
    }

    #[test]
    fn test_patch_with_path() {
        let args = CliArgs::parse_from(["pbxpatch", "patch", "/tmp/project.pbxproj"]);
        match args.command {
            Commands::Patch(patch_args) => {
                assert_eq!(
                    patch_args.project_path,
                    Some(PathBuf::from("/tmp/project.pbxproj"))
                );
            }
        }
    }

    #[test]
    fn test_patch_with_options() {
        let args = CliArgs::parse_from([
            "pbxpatch",
            "patch",
            "--format",
            "json",
            "-o",
            "report.json",
        ]);
        match args.command {
            Commands::Patch(patch_args) => {
                assert_eq!(patch_args.format, OutputFormatArg::Json);
                assert_eq!(patch_args.output, Some(PathBuf::from("report.json")));
            }
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let args = CliArgs::parse_from(["pbxpatch", "-v", "patch"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_quiet_flag() {
        let args = CliArgs::parse_from(["pbxpatch", "-q", "patch"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["pbxpatch", "--log-level", "debug", "patch"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
