use std::io::Write;

use crate::EXIT_SUCCESS;
use crate::cli::InitArgs;
use crate::error::Result;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::display_path;
use crate::project::{InitOptions, ProjectInitializer};
use crate::templates::{EmbeddedTemplates, TemplateProvider};

use super::context::CommandContext;

#[must_use]
pub fn run_init(args: &InitArgs, ctx: &CommandContext) -> i32 {
    match run_init_impl(
        &RealFileSystem,
        &EmbeddedTemplates,
        args,
        ctx,
        &mut std::io::stdout().lock(),
    ) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// Scaffolds a specs project in `args.dir`.
///
/// # Errors
/// Returns an error if the directory is missing, not writable, or a file
/// cannot be written.
pub fn run_init_impl<F: FileSystem, T: TemplateProvider, W: Write>(
    fs: &F,
    templates: &T,
    args: &InitArgs,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<i32> {
    let options = InitOptions {
        force: args.force,
        with_boilerplate: args.with_boilerplate,
    };
    let report = ProjectInitializer::new(fs, templates).init(&args.dir, options)?;

    if report.already_initialized {
        writeln!(
            out,
            "Project already initialized: {} exists",
            display_path(&report.specs_dir, None)
        )?;
        return Ok(EXIT_SUCCESS);
    }

    if let Some(probe) = &report.stray_probe {
        ctx.warn(&format!("could not remove {}", display_path(probe, None)));
    }
    for dir in &report.directories_created {
        ctx.note(&format!("created {}", display_path(dir, None)));
    }
    for file in &report.files_kept {
        ctx.note(&format!("kept existing {}", display_path(file, None)));
    }

    if !ctx.quiet {
        writeln!(
            out,
            "Initialized specs project in {}",
            display_path(&args.dir, None)
        )?;
        for file in &report.files_written {
            writeln!(out, "  created {}", display_path(file, None))?;
        }
        if !report.files_kept.is_empty() {
            writeln!(
                out,
                "  kept {} existing file(s), use --force to overwrite",
                report.files_kept.len()
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Next: write your specs, then run `specs validate`.")?;
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
