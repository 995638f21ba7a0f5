use std::io::Write;

use crate::EXIT_SUCCESS;
use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::display_path;
use crate::project::{ProjectUpdater, RulesAction, UpdateOptions, UpdateReport};
use crate::templates::{EmbeddedTemplates, RULES_FILE, TemplateProvider};

use super::context::CommandContext;

#[must_use]
pub fn run_update(args: &UpdateArgs, ctx: &CommandContext) -> i32 {
    let updater = ProjectUpdater::new(&RealFileSystem, &EmbeddedTemplates);
    match run_update_impl(&updater, args, ctx, &mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => ctx.fail(&e),
    }
}

/// Refreshes the templates and rules file of the project in `args.dir`.
///
/// # Errors
/// Returns `NotAProject` when `args.dir` holds no specs project, or an error if
/// a backup or refreshed file cannot be written.
pub fn run_update_impl<F: FileSystem, T: TemplateProvider, W: Write>(
    updater: &ProjectUpdater<'_, F, T>,
    args: &UpdateArgs,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<i32> {
    let options = UpdateOptions {
        dry_run: args.dry_run,
        force: args.force,
        no_backup: args.no_backup,
        merge: args.merge,
    };
    let report = updater.update(&args.dir, options)?;

    if let Some(probe) = &report.stray_probe {
        ctx.warn(&format!("could not remove {}", display_path(probe, None)));
    }
    for pruned in &report.pruned_backups {
        ctx.note(&format!("removed old backup {}", display_path(pruned, None)));
    }
    for (backup, reason) in &report.prune_failures {
        ctx.note(&format!(
            "could not remove old backup {}: {reason}",
            display_path(backup, None)
        ));
    }
    if let RulesAction::KeptCustomized { updated, .. } = &report.rules {
        ctx.warn(&format!(
            "{RULES_FILE} has local changes and was kept; the new version is in {}",
            display_path(updated, None)
        ));
    }

    if !ctx.quiet {
        write_summary(&report, out)?;
    }
    Ok(EXIT_SUCCESS)
}

fn write_summary<W: Write>(report: &UpdateReport, out: &mut W) -> Result<()> {
    let verb = if report.dry_run { "Would update" } else { "Updated" };

    if report.dry_run {
        writeln!(out, "Dry run: no files were changed.")?;
    }
    if let Some(backup) = &report.backup_dir {
        writeln!(out, "Backup created in {}", display_path(backup, None))?;
    }
    for template in &report.templates_updated {
        writeln!(out, "{verb} {}", display_path(template, None))?;
    }

    match &report.rules {
        RulesAction::Created => {
            let verb = if report.dry_run { "Would create" } else { "Created" };
            writeln!(out, "{verb} {RULES_FILE}")?;
        }
        RulesAction::Replaced => writeln!(out, "{verb} {RULES_FILE}")?,
        RulesAction::Overwritten => {
            writeln!(out, "{verb} {RULES_FILE} (local changes overwritten)")?;
        }
        RulesAction::KeptCustomized { updated, merged } => {
            writeln!(
                out,
                "Kept customized {RULES_FILE}; new version: {}",
                display_path(updated, None)
            )?;
            if let Some(merged) = merged {
                writeln!(out, "Merged version: {}", display_path(merged, None))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
