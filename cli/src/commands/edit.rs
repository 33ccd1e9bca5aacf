use super::{AppContext, MarkshelfCommand};
use markshelf::error::Result;
use markshelf::BookmarkEdit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditCommand {
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    /// `Some("")` clears the description; `None` keeps it
    pub description: Option<String>,
}

impl MarkshelfCommand for EditCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let Some(current) = ctx.store.get(&self.id) else {
            eprintln!("Bookmark {} not found", self.id);
            return Ok(());
        };

        let changes = BookmarkEdit {
            title: self.title.clone().unwrap_or_default(),
            url: self.url.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
        };

        if ctx.store.edit(&self.id, changes)?.is_some() {
            eprintln!("Bookmark {} updated successfully", self.id);
        }
        Ok(())
    }
}
