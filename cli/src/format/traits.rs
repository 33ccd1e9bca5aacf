use markshelf::error::Result;

/// A whole result list rendered as one document
pub trait BookmarkFormat {
    fn render(&self) -> Result<String>;
}
