//! Filter and sort pipeline over the bookmark collection.
//!
//! Everything here is pure: the input slice is never modified and each call
//! returns a fresh `Vec`.

use crate::models::bookmark::Bookmark;
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel selection meaning "do not filter"
pub const ALL: &str = "all";

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortMethod {
    /// Descending by creation time
    #[default]
    Newest,
    /// Ascending by creation time
    Oldest,
    Title,
    Category,
    /// Keep collection order (any unrecognized method name)
    Insertion,
}

impl SortMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMethod::Newest => "newest",
            SortMethod::Oldest => "oldest",
            SortMethod::Title => "title",
            SortMethod::Category => "category",
            SortMethod::Insertion => "insertion",
        }
    }
}

impl FromStr for SortMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "newest" => SortMethod::Newest,
            "oldest" => SortMethod::Oldest,
            "title" => SortMethod::Title,
            "category" => SortMethod::Category,
            _ => SortMethod::Insertion,
        })
    }
}

impl From<String> for SortMethod {
    fn from(s: String) -> Self {
        // from_str is infallible
        s.parse().unwrap_or_default()
    }
}

impl From<SortMethod> for String {
    fn from(method: SortMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection; `All` is the "all" sentinel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret a raw selection, treating "all" or an empty string as no filter
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();
        if selection.is_empty() || selection == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selection.to_string())
        }
    }

    fn matches(&self, bookmark: &Bookmark) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => bookmark.category == *category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteFilter {
    #[default]
    All,
    FavoritesOnly,
}

impl FavoriteFilter {
    fn matches(&self, bookmark: &Bookmark) -> bool {
        match self {
            FavoriteFilter::All => true,
            FavoriteFilter::FavoritesOnly => bookmark.is_favorite,
        }
    }
}

/// A complete filter + sort request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub category: CategoryFilter,
    pub favorites: FavoriteFilter,
    pub sort: SortMethod,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn favorites_only(mut self, only: bool) -> Self {
        self.favorites = if only {
            FavoriteFilter::FavoritesOnly
        } else {
            FavoriteFilter::All
        };
        self
    }

    pub fn sort(mut self, sort: SortMethod) -> Self {
        self.sort = sort;
        self
    }

    /// AND of the search, category, and favorite predicates
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        self.matches_lowered(bookmark, &self.search.to_lowercase())
    }

    fn matches_lowered(&self, bookmark: &Bookmark, needle: &str) -> bool {
        matches_search(bookmark, needle)
            && self.category.matches(bookmark)
            && self.favorites.matches(bookmark)
    }

    /// Filter then sort `collection`
    pub fn run(&self, collection: &[Bookmark]) -> Vec<Bookmark> {
        let needle = self.search.to_lowercase();
        let filtered: Vec<Bookmark> = collection
            .iter()
            .filter(|b| self.matches_lowered(b, &needle))
            .cloned()
            .collect();

        log::debug!(
            "Query matched {} of {} bookmark(s), sort = {}",
            filtered.len(),
            collection.len(),
            self.sort
        );
        sort_bookmarks(filtered, self.sort)
    }
}

/// Functional form of [`Query::run`]
pub fn query(
    collection: &[Bookmark],
    search: &str,
    category: &CategoryFilter,
    favorites: FavoriteFilter,
    sort: SortMethod,
) -> Vec<Bookmark> {
    Query {
        search: search.to_string(),
        category: category.clone(),
        favorites,
        sort,
    }
    .run(collection)
}

/// `needle` must already be lowercase
fn matches_search(bookmark: &Bookmark, needle: &str) -> bool {
    needle.is_empty()
        || bookmark.title.to_lowercase().contains(needle)
        || bookmark.url.to_lowercase().contains(needle)
        || bookmark.description.to_lowercase().contains(needle)
}

/// Sort an owned list; stable, so equal keys keep collection order
pub fn sort_bookmarks(mut records: Vec<Bookmark>, method: SortMethod) -> Vec<Bookmark> {
    match method {
        SortMethod::Newest => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMethod::Oldest => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMethod::Title => records.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortMethod::Category => records.sort_by(|a, b| locale_compare(&a.category, &b.category)),
        SortMethod::Insertion => {}
    }
    records
}

thread_local! {
    /// Korean collation: Hangul ahead of Latin, lowercase ahead of uppercase,
    /// accented letters next to their base letter
    static COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("ko").into(), CollatorOptions::new()).ok();
}

/// Compare two strings the way a Korean-locale user expects them ordered
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| a.cmp(b)),
    })
}
