use std::path::{Path, PathBuf};

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigStore, resolve_default_path};
use crate::error::{Result, SpecsError};
use crate::filesystem::FileSystem;
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_PROBLEMS_FOUND, EXIT_USAGE_ERROR};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Global flags shared by every subcommand.
pub struct CommandContext {
    pub color: ColorMode,
    pub verbose: u8,
    pub quiet: bool,
    pub no_config: bool,
    diagnostics: ErrorOutput,
}

impl CommandContext {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let color = color_choice_to_mode(cli.color);
        Self {
            color,
            verbose: cli.verbose,
            quiet: cli.quiet,
            no_config: cli.no_config,
            diagnostics: ErrorOutput::new(color),
        }
    }

    /// Prints `message` as a note in verbose mode.
    pub fn note(&self, message: &str) {
        if self.verbose > 0 {
            self.diagnostics.print_note(message);
        }
    }

    pub fn warn(&self, message: &str) {
        self.diagnostics.print_warning(message);
    }

    /// Reports `error` on stderr and returns the matching exit code.
    #[must_use]
    pub fn fail(&self, error: &SpecsError) -> i32 {
        self.diagnostics.report(error);
        exit_code_for(error)
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            color: ColorMode::Never,
            verbose: 0,
            quiet: false,
            no_config: false,
            diagnostics: ErrorOutput::new(ColorMode::Never),
        }
    }
}

/// Input errors exit with 2, everything else with 1.
#[must_use]
pub const fn exit_code_for(error: &SpecsError) -> i32 {
    if error.is_input_error() {
        EXIT_USAGE_ERROR
    } else {
        EXIT_PROBLEMS_FOUND
    }
}

/// Loads the user configuration, or the defaults with `--no-config` or when
/// no configuration directory exists.
///
/// # Errors
/// Returns an error if the configuration file exists but cannot be read or parsed.
pub fn load_config<F: FileSystem>(fs: &F, ctx: &CommandContext) -> Result<Config> {
    if ctx.no_config {
        ctx.note("configuration file skipped (--no-config)");
        return Ok(Config::default());
    }

    let store = ConfigStore::new(fs);
    let Ok(path) = store.path() else {
        ctx.note("no configuration directory, using defaults");
        return Ok(Config::default());
    };

    if fs.exists(&path) {
        ctx.note(&format!("using configuration file {}", path.display()));
    }
    store.load()
}

/// The path a command works on: the explicit argument, or the configured
/// default spec directory.
///
/// # Errors
/// Returns an error if the current directory cannot be determined.
pub fn resolve_spec_path<F: FileSystem>(
    fs: &F,
    ctx: &CommandContext,
    config: &Config,
    path: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    let resolved = resolve_default_path(fs, config)?;
    ctx.note(&format!("using default specs path {}", resolved.display()));
    Ok(resolved)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
