use super::helpers::resolve_format;
use super::{AppContext, MarkshelfCommand};
use markshelf::error::Result;
use markshelf::{CategoryFilter, Query, SortMethod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCommand {
    pub search: Option<String>,
    pub category: Option<String>,
    pub favorites: bool,
    pub sort: Option<String>,
    pub limit: Option<usize>,
    pub format: Option<String>,
    pub nc: bool,
}

impl ListCommand {
    /// Sort named on the command line, else the configured default
    fn sort_method(&self, default: SortMethod) -> SortMethod {
        self.sort
            .as_deref()
            .map(|s| s.parse().unwrap_or(SortMethod::Insertion))
            .unwrap_or(default)
    }

    fn build_query(&self, default_sort: SortMethod) -> Query {
        Query::new()
            .search(self.search.clone().unwrap_or_default())
            .category(CategoryFilter::from_selection(
                self.category.as_deref().unwrap_or_default(),
            ))
            .favorites_only(self.favorites)
            .sort(self.sort_method(default_sort))
    }
}

impl MarkshelfCommand for ListCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let mut records = self
            .build_query(ctx.config.default_sort)
            .run(ctx.store.bookmarks());

        if records.is_empty() {
            if ctx.store.is_empty() {
                eprintln!("No bookmarks yet.");
            } else {
                eprintln!("No bookmarks found matching the search criteria.");
            }
            return Ok(());
        }

        if let Some(limit) = self.limit {
            records.truncate(limit);
        }

        resolve_format(self.format.as_deref()).print_bookmarks(&records, self.nc)
    }
}
