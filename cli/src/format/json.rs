use crate::format::traits::BookmarkFormat;
use markshelf::error::Result;
use markshelf::models::bookmark::Bookmark;

pub struct JsonBookmarks<'a>(pub &'a [Bookmark]);

impl<'a> BookmarkFormat for JsonBookmarks<'a> {
    fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.0)?)
    }
}
