use std::io::Write;

use crate::EXIT_SUCCESS;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::lister::{ListFilter, SpecLister};
use crate::output::formatter_for;

use super::context::{CommandContext, load_config, resolve_spec_path};

#[must_use]
pub fn run_list(args: &ListArgs, ctx: &CommandContext) -> i32 {
    match run_list_impl(&RealFileSystem, args, ctx, &mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// Lists the specs of a directory with their status.
///
/// # Errors
/// Returns an error if the path is missing or not a directory.
pub fn run_list_impl<F: FileSystem, W: Write>(
    fs: &F,
    args: &ListArgs,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<i32> {
    let config = load_config(fs, ctx)?;
    let path = resolve_spec_path(fs, ctx, &config, args.path.as_deref())?;

    let filter = ListFilter {
        complete: args.complete,
        incomplete: args.incomplete,
        errors: args.errors,
    };
    let listing = SpecLister::new(fs).list(&path, filter)?;

    let base = fs.current_dir().ok();
    let formatter = formatter_for(args.format, ctx.color, base.as_deref());
    write!(out, "{}", formatter.format_listing(&listing)?)?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
