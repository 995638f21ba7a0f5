use std::io::Write;

use crate::EXIT_SUCCESS;
use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::ConfigStore;
use crate::error::Result;
use crate::filesystem::{FileSystem, RealFileSystem};

use super::context::CommandContext;

#[must_use]
pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> i32 {
    match run_config_impl(&RealFileSystem, args, ctx, &mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// Shows, reads or changes the user configuration. `show` is the default.
///
/// # Errors
/// Returns an error for an unknown key, an invalid value, or a configuration
/// file that cannot be read or written.
pub fn run_config_impl<F: FileSystem, W: Write>(
    fs: &F,
    args: &ConfigArgs,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<i32> {
    let store = ConfigStore::new(fs);
    match args.action.as_ref().unwrap_or(&ConfigAction::Show) {
        ConfigAction::Show => show(&store, out)?,
        ConfigAction::Get { key } => writeln!(out, "{}", store.get(key)?)?,
        ConfigAction::Set { key, value } => {
            let stored = store.set(key, value)?;
            ctx.note(&format!("wrote {}", store.path()?.display()));
            if !ctx.quiet {
                writeln!(out, "Configuration updated: {key} = {stored}")?;
            }
        }
    }
    Ok(EXIT_SUCCESS)
}

fn show<F: FileSystem, W: Write>(store: &ConfigStore<'_, F>, out: &mut W) -> Result<()> {
    let path = store.path()?;
    writeln!(out, "Configuration file: {}", path.display())?;
    if !store.exists()? {
        writeln!(out, "(file does not exist, showing defaults)")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&store.load()?)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
