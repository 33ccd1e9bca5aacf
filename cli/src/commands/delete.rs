use super::helpers::confirm;
use super::{AppContext, MarkshelfCommand};
use markshelf::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCommand {
    pub ids: Vec<String>,
    pub force: bool,
}

impl MarkshelfCommand for DeleteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let mut selected = Vec::new();
        for id in &self.ids {
            match ctx.store.get(id) {
                Some(bookmark) => selected.push(bookmark.clone()),
                None => eprintln!("Bookmark {} not found", id),
            }
        }

        if selected.is_empty() {
            eprintln!("No bookmarks to delete.");
            return Ok(());
        }

        eprintln!("Bookmarks to be deleted:");
        for bookmark in &selected {
            eprintln!("  {} - {} ({})", bookmark.id, bookmark.title, bookmark.url);
        }

        // Ask for confirmation unless --force
        let confirmed =
            self.force || confirm(&format!("\nDelete {} bookmark(s)?", selected.len()))?;
        if !confirmed {
            eprintln!("Deletion cancelled.");
            return Ok(());
        }

        let mut count = 0;
        for bookmark in &selected {
            if ctx.store.delete(&bookmark.id)? {
                count += 1;
            }
        }
        eprintln!("Deleted {} bookmark(s).", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_env::TestEnv;

    #[test]
    fn test_delete_command() {
        let mut env = TestEnv::new();
        let keep = env.seed("Keep", "https://keep.example", "dev");
        let drop = env.seed("Drop", "https://drop.example", "dev");

        let cmd = DeleteCommand {
            ids: vec![drop.clone(), "missing".to_string()],
            force: true, // Force to skip confirmation in tests
        };
        cmd.execute(&mut env.ctx()).unwrap();

        assert!(env.store.get(&drop).is_none());
        assert!(env.store.get(&keep).is_some());
        assert_eq!(env.store.len(), 1);
    }

    #[test]
    fn test_delete_nothing_selected() {
        let mut env = TestEnv::new();
        env.seed("Keep", "https://keep.example", "dev");

        let cmd = DeleteCommand {
            ids: vec!["missing".to_string()],
            force: false,
        };
        assert!(cmd.execute(&mut env.ctx()).is_ok());
        assert_eq!(env.store.len(), 1);
    }
}
