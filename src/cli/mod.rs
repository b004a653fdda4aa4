pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, PatchArgs};
pub use output::{OutputFormat, OutputFormatter};
