use super::helpers::confirm;
use super::{AppContext, MarkshelfCommand};
use markshelf::error::Result;
use markshelf::import_export::{parse_import, read_import_file, write_export};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCommand {
    pub file: PathBuf,
    /// Merge without asking even when bookmarks already exist
    pub yes: bool,
}

impl ImportCommand {
    fn should_prompt(&self, ctx: &AppContext) -> bool {
        !self.yes && ctx.config.confirm_import && ctx.store.import_needs_confirmation()
    }
}

impl MarkshelfCommand for ImportCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let raw = read_import_file(&self.file)?;

        // Validate before asking anything so a bad file fails fast
        let incoming = parse_import(&raw)?.len();

        let proceed = if self.should_prompt(ctx) {
            confirm(&format!(
                "Merge {} bookmark(s) into your {} existing one(s)?",
                incoming,
                ctx.store.len()
            ))?
        } else {
            true
        };

        let report = ctx.store.import(&raw, proceed)?;
        if !report.proceeded {
            eprintln!("Import cancelled.");
            return Ok(());
        }

        eprintln!("Imported {} bookmark(s).", report.imported_count);
        if report.duplicate_count > 0 {
            eprintln!(
                "Skipped {} duplicate(s): {}",
                report.duplicate_count,
                report.duplicate_ids.join(", ")
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportCommand {
    /// Target directory, overriding the configured one
    pub dir: Option<PathBuf>,
    /// Print the export instead of writing a file
    pub stdout: bool,
}

impl MarkshelfCommand for ExportCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let bundle = ctx.store.export()?;

        if self.stdout {
            println!("{}", bundle.contents);
            return Ok(());
        }

        let dir = self.dir.clone().unwrap_or_else(|| ctx.config.export_dir());
        let path = write_export(&bundle, &dir)?;
        eprintln!("Exported {} bookmark(s) to {}", bundle.count, path.display());
        Ok(())
    }
}
