use super::{AppContext, MarkshelfCommand};
use markshelf::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteCommand {
    pub ids: Vec<String>,
}

impl MarkshelfCommand for FavoriteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        for id in &self.ids {
            match ctx.store.toggle_favorite(id)? {
                Some(true) => eprintln!("★ {} marked as favorite", id),
                Some(false) => eprintln!("☆ {} removed from favorites", id),
                None => eprintln!("Bookmark {} not found", id),
            }
        }
        Ok(())
    }
}
