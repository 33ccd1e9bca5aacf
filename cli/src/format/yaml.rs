use crate::format::traits::BookmarkFormat;
use markshelf::error::Result;
use markshelf::models::bookmark::Bookmark;

pub struct YamlBookmarks<'a>(pub &'a [Bookmark]);

impl<'a> BookmarkFormat for YamlBookmarks<'a> {
    fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self.0)?)
    }
}
