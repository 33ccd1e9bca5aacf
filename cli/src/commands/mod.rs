use markshelf::config::Config;
use markshelf::error::Result;
use markshelf::{BookmarkStore, SqliteStore};

pub struct AppContext<'a> {
    pub store: &'a mut BookmarkStore<SqliteStore>,
    pub config: &'a Config,
}

pub mod add;
pub mod delete;
pub mod edit;
pub mod favorite;
pub mod helpers;
pub mod import_export;
pub mod list;
pub mod misc;

#[cfg(test)]
pub(crate) mod test_env;

pub trait MarkshelfCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn MarkshelfCommand>)
pub enum CommandEnum {
    Add(add::AddCommand),
    List(list::ListCommand),
    Edit(edit::EditCommand),
    Delete(delete::DeleteCommand),
    Favorite(favorite::FavoriteCommand),
    Import(import_export::ImportCommand),
    Export(import_export::ExportCommand),
    Categories(misc::CategoriesCommand),
    Open(misc::OpenCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Edit(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Favorite(cmd) => cmd.execute(ctx),
            Self::Import(cmd) => cmd.execute(ctx),
            Self::Export(cmd) => cmd.execute(ctx),
            Self::Categories(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
        }
    }
}
