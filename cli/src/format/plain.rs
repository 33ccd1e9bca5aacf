use crate::format::traits::BookmarkFormat;
use markshelf::error::Result;
use markshelf::models::bookmark::Bookmark;

pub struct PlainBookmark<'a>(pub &'a Bookmark);

impl<'a> BookmarkFormat for PlainBookmark<'a> {
    fn render(&self) -> Result<String> {
        let b = self.0;
        let star = if b.is_favorite { "*" } else { " " };
        let mut s = format!("{} {} [{}]\n  > {}\n", star, b.title, b.category, b.url);
        if !b.description.trim().is_empty() {
            s.push_str(&format!("  + {}\n", b.description));
        }
        s.push_str(&format!("  id: {}\n", b.id));
        Ok(s)
    }
}
