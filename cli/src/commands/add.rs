use super::{AppContext, MarkshelfCommand};
use markshelf::error::Result;
use markshelf::NewBookmark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommand {
    pub url: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl MarkshelfCommand for AddCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        // Missing fields go through as empty so the library reports which one
        let fields = NewBookmark {
            title: self.title.clone().unwrap_or_default(),
            url: self.url.clone(),
            category: self.category.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
        };

        let added = ctx.store.add(fields)?;
        eprintln!("Added bookmark {}", added.id);
        Ok(())
    }
}
