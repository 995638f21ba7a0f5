use std::io::Write;

use crate::EXIT_SUCCESS;
use crate::error::Result;

use super::context::CommandContext;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[must_use]
pub fn run_version(ctx: &CommandContext) -> i32 {
    match run_version_impl(&mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// # Errors
/// Returns an error if stdout cannot be written.
pub fn run_version_impl<W: Write>(out: &mut W) -> Result<i32> {
    writeln!(out, "specs {VERSION}")?;
    Ok(EXIT_SUCCESS)
}
