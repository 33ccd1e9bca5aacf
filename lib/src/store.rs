use crate::error::{MarkshelfError, Result};
use crate::migration;
use crate::models::bookmark::Bookmark;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Key under which the whole collection is persisted
pub const STORAGE_KEY: &str = "bookmarks";

/// A persistent string-to-string slot store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Non-persistent backend, used by tests and benchmarks
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Decode a persisted blob into bookmarks, applying migrations on the way.
/// Returns the records and how many of them were migrated.
pub fn decode_collection(blob: &str) -> Result<(Vec<Bookmark>, usize)> {
    let parsed: Value = serde_json::from_str(blob)?;
    let Value::Array(mut records) = parsed else {
        return Err(MarkshelfError::Parse(
            "stored bookmarks are not a JSON array".to_string(),
        ));
    };

    let migrated = migration::migrate_records(&mut records);
    let bookmarks = records
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<Bookmark>, _>>()?;

    Ok((bookmarks, migrated))
}

/// Owns the in-memory collection and the backend it is persisted to.
///
/// The collection is the single source of truth between `save` calls. All
/// mutation goes through `&mut self`, so there is exactly one writer.
pub struct BookmarkStore<S: KeyValueStore> {
    backend: S,
    bookmarks: Vec<Bookmark>,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Wrap a backend without reading from it; the collection starts empty
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            bookmarks: Vec::new(),
        }
    }

    /// Wrap a backend and load the persisted collection
    pub fn open(backend: S) -> Result<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the persisted one.
    /// On error the current collection is left as it was.
    pub fn load(&mut self) -> Result<usize> {
        let bookmarks = match self.backend.get(STORAGE_KEY)? {
            Some(blob) => {
                let (bookmarks, migrated) = decode_collection(&blob)?;
                log::debug!(
                    "Loaded {} bookmark(s) ({} migrated)",
                    bookmarks.len(),
                    migrated
                );
                bookmarks
            }
            None => {
                log::debug!("No stored bookmarks, starting empty");
                Vec::new()
            }
        };

        self.bookmarks = bookmarks;
        Ok(self.bookmarks.len())
    }

    /// Serialize the full collection and write it in a single call
    pub fn save(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.bookmarks)?;
        self.backend.set(STORAGE_KEY, &blob)?;
        log::debug!("Saved {} bookmark(s), {} bytes", self.bookmarks.len(), blob.len());
        Ok(())
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Distinct categories in the collection with their record counts,
    /// sorted by category name
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for bookmark in &self.bookmarks {
            *counts.entry(bookmark.category.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(category, count)| (category.to_string(), count))
            .collect()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Apply `change` to the collection and persist it.
    ///
    /// `change` returns `None` when it made no modification; nothing is saved
    /// then. If saving fails the collection is restored to its prior state.
    pub(crate) fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Vec<Bookmark>) -> Option<T>,
    ) -> Result<Option<T>> {
        let snapshot = self.bookmarks.clone();
        let Some(value) = change(&mut self.bookmarks) else {
            return Ok(None);
        };

        if let Err(e) = self.save() {
            self.bookmarks = snapshot;
            return Err(e);
        }
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    /// Backend whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(MarkshelfError::Io(std::io::Error::other("read-only")))
        }
    }

    const LEGACY_BLOB: &str = r#"[
        {"id":"1","title":"Rust","url":"https://rust-lang.org","category":"dev",
         "description":"","createdAt":"2024-01-01T00:00:00.000Z",
         "updatedAt":"2024-01-01T00:00:00.000Z"},
        {"id":"2","title":"News","url":"https://news.example","category":"news",
         "description":"daily","createdAt":"2024-01-02T00:00:00.000Z",
         "updatedAt":"2024-01-02T00:00:00.000Z","isFavorite":true}
    ]"#;

    #[test]
    fn test_load_absent_slot_is_empty() {
        let store = BookmarkStore::open(MemoryStore::new()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_migrates_missing_favorite() {
        let store = BookmarkStore::open(MemoryStore::with_value(STORAGE_KEY, LEGACY_BLOB)).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.get("1").unwrap().is_favorite);
        assert!(store.get("2").unwrap().is_favorite);
    }

    #[rstest]
    #[case("not json")]
    #[case("{\"id\":\"1\"}")]
    #[case("[{\"id\":\"1\",\"title\":\"t\"}]")]
    fn test_load_invalid_blob_is_parse_error(#[case] blob: &str) {
        let result = BookmarkStore::open(MemoryStore::with_value(STORAGE_KEY, blob));
        match result {
            Err(e) => assert_eq!(e.kind(), ErrorKind::Parse),
            Ok(_) => panic!("expected parse error for {:?}", blob),
        }
    }

    #[test]
    fn test_load_accepts_null_description_and_plain_dates() {
        let blob = r#"[
            {"id":"1","title":"a","url":"u","category":"c","description":null,"isFavorite":true},
            {"id":"2","title":"b","url":"u","category":"c","createdAt":"2024-01-01","updatedAt":"2024-01-02T09:00:00"}
        ]"#;
        let store = BookmarkStore::open(MemoryStore::with_value(STORAGE_KEY, blob)).unwrap();

        assert_eq!(store.get("1").unwrap().description, "");
        let second = store.get("2").unwrap();
        assert_eq!(second.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(second.updated_at.to_rfc3339(), "2024-01-02T09:00:00+00:00");
        assert!(!second.is_favorite);
    }

    #[test]
    fn test_failed_load_keeps_collection() {
        let mut store =
            BookmarkStore::open(MemoryStore::with_value(STORAGE_KEY, LEGACY_BLOB)).unwrap();
        store.backend.set(STORAGE_KEY, "garbage").unwrap();
        assert!(store.load().is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store =
            BookmarkStore::open(MemoryStore::with_value(STORAGE_KEY, LEGACY_BLOB)).unwrap();
        store.save().unwrap();

        let blob = store.backend().get(STORAGE_KEY).unwrap().unwrap();
        let reopened = BookmarkStore::open(MemoryStore::with_value(STORAGE_KEY, &blob)).unwrap();
        assert_eq!(reopened.bookmarks(), store.bookmarks());
        assert!(blob.contains("\"isFavorite\":false"));
    }

    #[test]
    fn test_category_counts() {
        let store = BookmarkStore::open(MemoryStore::with_value(STORAGE_KEY, LEGACY_BLOB)).unwrap();
        assert_eq!(
            store.category_counts(),
            vec![("dev".to_string(), 1), ("news".to_string(), 1)]
        );
    }

    #[test]
    fn test_commit_restores_on_save_failure() {
        let backend = ReadOnlyStore(MemoryStore::with_value(STORAGE_KEY, LEGACY_BLOB));
        let mut store = BookmarkStore::open(backend).unwrap();

        let result = store.commit(|bookmarks| {
            bookmarks.clear();
            Some(())
        });

        assert!(result.is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_commit_without_change_skips_save() {
        let backend = ReadOnlyStore(MemoryStore::new());
        let mut store = BookmarkStore::new(backend);
        let result: Result<Option<()>> = store.commit(|_| None);
        assert!(matches!(result, Ok(None)));
    }
}
