use crate::error::{MarkshelfError, Result};
use crate::models::bookmark::Bookmark;
use crate::store::{BookmarkStore, KeyValueStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fields collected for a new bookmark
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: String,
}

/// Replacement values for an existing bookmark.
///
/// Empty (after trim) title, url, or category keep the current value.
/// The description is always replaced, so an empty one clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEdit {
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: String,
}

/// Trimmed value of a required field, or a validation error naming it
pub fn require_field(name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MarkshelfError::Validation(format!("{} is required", name)));
    }
    Ok(trimmed.to_string())
}

fn replace_if_present(current: &mut String, candidate: &str) {
    let candidate = candidate.trim();
    if !candidate.is_empty() {
        *current = candidate.to_string();
    }
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Validate and append a new bookmark, then persist.
    /// Returns the stored record.
    pub fn add(&mut self, fields: NewBookmark) -> Result<Bookmark> {
        let title = require_field("title", &fields.title)?;
        let url = require_field("url", &fields.url)?;
        let category = require_field("category", &fields.category)?;

        let bookmark = Bookmark::new(
            title,
            url,
            category,
            fields.description.trim().to_string(),
            Utc::now(),
        );

        let added = self.commit(|bookmarks| {
            bookmarks.push(bookmark.clone());
            Some(bookmark)
        })?;
        let added = added.ok_or_else(|| MarkshelfError::Other("bookmark was not added".into()))?;
        log::debug!("Added bookmark {}", added.id);
        Ok(added)
    }

    /// Remove the record with `id`. Returns false (and saves nothing) when
    /// no such record exists.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.commit(|bookmarks| {
            let position = bookmarks.iter().position(|b| b.id == id)?;
            Some(bookmarks.remove(position))
        })?;

        if let Some(bookmark) = &removed {
            log::debug!("Deleted bookmark {}", bookmark.id);
        }
        Ok(removed.is_some())
    }

    /// Flip `is_favorite`. Returns the new value, or `None` for an unknown id.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Option<bool>> {
        self.commit(|bookmarks| {
            let bookmark = bookmarks.iter_mut().find(|b| b.id == id)?;
            bookmark.is_favorite = !bookmark.is_favorite;
            Some(bookmark.is_favorite)
        })
    }

    /// Apply `changes` to the record with `id` and refresh its `updated_at`.
    /// Returns the updated record, or `None` for an unknown id.
    pub fn edit(&mut self, id: &str, changes: BookmarkEdit) -> Result<Option<Bookmark>> {
        let now = Utc::now();
        self.commit(|bookmarks| {
            let bookmark = bookmarks.iter_mut().find(|b| b.id == id)?;
            replace_if_present(&mut bookmark.title, &changes.title);
            replace_if_present(&mut bookmark.url, &changes.url);
            replace_if_present(&mut bookmark.category, &changes.category);
            bookmark.description = changes.description.trim().to_string();
            bookmark.touch(now);
            Some(bookmark.clone())
        })
    }
}
