use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "specs")]
#[command(author, version, about = "Scaffold, validate and check spec-driven development documents")]
#[command(long_about = "Manages a directory of NN-name.spec.md documents: scaffolds a project, \
    validates required sections and the six-item checklist, and checks numbering, \
    file names and cross-links.\n\n\
    Exit codes:\n  \
    0 - Success, nothing to report\n  \
    1 - Problems found or runtime failure\n  \
    2 - Invalid arguments or input")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading the configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the specs/ directory, templates and project rules
    Init(InitArgs),

    /// Validate sections and checklist of one spec or a directory of specs
    Validate(ValidateArgs),

    /// List specs with their completion status
    List(ListArgs),

    /// Check numbering, file names and links across a spec directory
    Check(CheckArgs),

    /// Show a progress dashboard for a spec directory
    View(ViewArgs),

    /// Show or change the user configuration
    Config(ConfigArgs),

    /// Refresh templates and project rules, keeping customizations
    Update(UpdateArgs),

    /// Print the version
    Version,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Also create boilerplate/specs/ with the templates
    #[arg(long)]
    pub with_boilerplate: bool,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Spec file or directory (default: configured specs path)
    pub path: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ListArgs {
    /// Spec directory (default: configured specs path)
    pub path: Option<PathBuf>,

    /// Only complete specs
    #[arg(long, alias = "only-complete")]
    pub complete: bool,

    /// Only incomplete specs
    #[arg(long, alias = "only-incomplete")]
    pub incomplete: bool,

    /// Only specs with errors
    #[arg(long)]
    pub errors: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Spec directory (default: configured specs path)
    pub path: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Spec directory (default: configured specs path)
    pub path: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Display the configuration file location and contents (default)
    Show,

    /// Print the value of one key
    Get {
        /// Key, e.g. specs.default_path
        key: String,
    },

    /// Change the value of one key
    Set {
        /// Key, e.g. specs.exclude_templates
        key: String,
        /// New value
        value: String,
    },
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct UpdateArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite a customized rules file
    #[arg(long)]
    pub force: bool,

    /// Do not back up files before replacing them
    #[arg(long)]
    pub no_backup: bool,

    /// Also write a merged rules file next to a customized one
    #[arg(long)]
    pub merge: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
