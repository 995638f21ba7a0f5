use std::io::Write;

use crate::EXIT_SUCCESS;
use crate::cli::ViewArgs;
use crate::dashboard::DashboardBuilder;
use crate::error::Result;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::formatter_for;

use super::context::{CommandContext, load_config, resolve_spec_path};

#[must_use]
pub fn run_view(args: &ViewArgs, ctx: &CommandContext) -> i32 {
    match run_view_impl(&RealFileSystem, args, ctx, &mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// Prints the progress dashboard of a spec directory.
///
/// # Errors
/// Returns an error if the path is missing or not a directory.
pub fn run_view_impl<F: FileSystem, W: Write>(
    fs: &F,
    args: &ViewArgs,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<i32> {
    let config = load_config(fs, ctx)?;
    let path = resolve_spec_path(fs, ctx, &config, args.path.as_deref())?;

    let dashboard = DashboardBuilder::new(fs)
        .exclude_templates(config.specs.exclude_templates)
        .build(&path)?;

    let base = fs.current_dir().ok();
    let formatter = formatter_for(args.format, ctx.color, base.as_deref());
    write!(out, "{}", formatter.format_dashboard(&dashboard)?)?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
