use std::io::Write;

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::formatter_for;
use crate::validator::SpecValidator;
use crate::{EXIT_PROBLEMS_FOUND, EXIT_SUCCESS};

use super::context::{CommandContext, load_config, resolve_spec_path};

#[must_use]
pub fn run_validate(args: &ValidateArgs, ctx: &CommandContext) -> i32 {
    match run_validate_impl(&RealFileSystem, args, ctx, &mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// Validates one spec or every spec below a directory and prints the report.
///
/// # Errors
/// Returns an error if the path does not exist, has the wrong extension, or
/// cannot be read.
pub fn run_validate_impl<F: FileSystem, W: Write>(
    fs: &F,
    args: &ValidateArgs,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<i32> {
    let config = load_config(fs, ctx)?;
    let path = resolve_spec_path(fs, ctx, &config, args.path.as_deref())?;

    let report = SpecValidator::new(fs).validate(&path)?;
    ctx.note(&format!("validated {} spec(s)", report.results.len()));

    let base = fs.current_dir().ok();
    let formatter = formatter_for(args.format, ctx.color, base.as_deref());
    write!(out, "{}", formatter.format_validation(&report)?)?;

    Ok(if report.has_errors() {
        EXIT_PROBLEMS_FOUND
    } else {
        EXIT_SUCCESS
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
