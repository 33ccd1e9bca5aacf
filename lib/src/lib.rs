pub mod browser;
pub mod config;
pub mod db;
pub mod error;
pub mod import_export;
pub mod migration;
pub mod models;
pub mod operations;
pub mod query;
pub mod store;
pub mod utils;

// Re-export the types most callers need
pub use db::SqliteStore;
pub use error::{ErrorKind, MarkshelfError, Result};
pub use models::bookmark::Bookmark;
pub use operations::{BookmarkEdit, NewBookmark};
pub use query::{CategoryFilter, FavoriteFilter, Query, SortMethod};
pub use store::{BookmarkStore, KeyValueStore, MemoryStore};
