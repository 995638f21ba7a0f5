use std::io::Write;

use crate::checker::ConsistencyChecker;
use crate::cli::CheckArgs;
use crate::error::Result;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::formatter_for;
use crate::{EXIT_PROBLEMS_FOUND, EXIT_SUCCESS};

use super::context::{CommandContext, load_config, resolve_spec_path};

#[must_use]
pub fn run_check(args: &CheckArgs, ctx: &CommandContext) -> i32 {
    match run_check_impl(&RealFileSystem, args, ctx, &mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// Runs the consistency checks over a spec directory.
///
/// Any finding, warning or error, makes the command exit with 1.
///
/// # Errors
/// Returns an error if the path is missing or not a directory.
pub fn run_check_impl<F: FileSystem, W: Write>(
    fs: &F,
    args: &CheckArgs,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<i32> {
    let config = load_config(fs, ctx)?;
    let path = resolve_spec_path(fs, ctx, &config, args.path.as_deref())?;

    let report = ConsistencyChecker::new(fs).check(&path)?;
    ctx.note(&format!("checked {} spec(s)", report.total_specs));

    let base = fs.current_dir().ok();
    let formatter = formatter_for(args.format, ctx.color, base.as_deref());
    write!(out, "{}", formatter.format_check(&report)?)?;

    Ok(if report.has_problems() {
        EXIT_PROBLEMS_FOUND
    } else {
        EXIT_SUCCESS
    })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
