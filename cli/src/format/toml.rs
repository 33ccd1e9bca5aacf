use crate::format::traits::BookmarkFormat;
use markshelf::error::{MarkshelfError, Result};
use markshelf::models::bookmark::Bookmark;
use serde::Serialize;

pub struct TomlBookmarks<'a>(pub &'a [Bookmark]);

/// TOML has no top-level arrays, so records become `[[bookmarks]]` tables
#[derive(Serialize)]
struct Document<'a> {
    bookmarks: &'a [Bookmark],
}

impl<'a> BookmarkFormat for TomlBookmarks<'a> {
    fn render(&self) -> Result<String> {
        toml::to_string_pretty(&Document { bookmarks: self.0 })
            .map_err(|e| MarkshelfError::Other(format!("TOML error: {}", e)))
    }
}
