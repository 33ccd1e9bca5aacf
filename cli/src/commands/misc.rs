use super::{AppContext, MarkshelfCommand};
use markshelf::browser;
use markshelf::error::Result;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCommand {
    pub ids: Vec<String>,
}

impl MarkshelfCommand for OpenCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        for id in &self.ids {
            if let Some(rec) = ctx.store.get(id) {
                eprintln!("Opening: {}", rec.url);
                browser::open_url(&rec.url)?;
            } else {
                eprintln!("Bookmark {} not found", id);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesCommand {
    pub nc: bool,
}

impl CategoriesCommand {
    /// Categories in use with their counts, followed by configured
    /// suggestions nobody has used yet (count 0)
    fn rows(ctx: &AppContext) -> Vec<(String, usize)> {
        let mut rows = ctx.store.category_counts();
        for suggested in &ctx.config.categories {
            if !rows.iter().any(|(name, _)| name == suggested) {
                rows.push((suggested.clone(), 0));
            }
        }
        rows
    }
}

impl MarkshelfCommand for CategoriesCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        for (name, count) in Self::rows(ctx) {
            if self.nc {
                println!("{:>5}  {}", count, name);
            } else {
                println!("{:>5}  {}", count.bright_blue(), name.green());
            }
        }
        Ok(())
    }
}
