use crate::error::{MarkshelfError, Result};
use crate::models::bookmark::Bookmark;
use crate::store::{BookmarkStore, KeyValueStore};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension used for export files
pub const EXPORT_EXTENSION: &str = "json";

/// Trait for rendering a collection into a transportable text blob
pub trait BookmarkExporter {
    fn render(&self, bookmarks: &[Bookmark]) -> Result<String>;
}

/// Pretty-printed JSON array, readable back by the importer
pub struct JsonExporter;

impl BookmarkExporter for JsonExporter {
    fn render(&self, bookmarks: &[Bookmark]) -> Result<String> {
        Ok(serde_json::to_string_pretty(bookmarks)?)
    }
}

/// Serialized collection plus the filename it should be saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub filename: String,
    pub contents: String,
    pub count: usize,
}

/// `bookmarks_YYYYMMDD_HHMMSS.json` for the given moment
pub fn export_filename<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "bookmarks_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        EXPORT_EXTENSION
    )
}

/// Export the collection, naming the file after the current local time.
/// Fails with `EmptyCollection` when there is nothing to export.
pub fn export_bookmarks(bookmarks: &[Bookmark]) -> Result<ExportBundle> {
    export_bookmarks_at(bookmarks, &Local::now())
}

pub fn export_bookmarks_at<Tz>(bookmarks: &[Bookmark], now: &DateTime<Tz>) -> Result<ExportBundle>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if bookmarks.is_empty() {
        return Err(MarkshelfError::EmptyCollection);
    }

    let contents = JsonExporter.render(bookmarks)?;
    Ok(ExportBundle {
        filename: export_filename(now),
        contents,
        count: bookmarks.len(),
    })
}

/// Write the bundle into `dir` under its derived filename
pub fn write_export(bundle: &ExportBundle, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&bundle.filename);
    fs::write(&path, &bundle.contents)?;
    log::info!("Exported {} bookmark(s) to {:?}", bundle.count, path);
    Ok(path)
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn export(&self) -> Result<ExportBundle> {
        export_bookmarks(self.bookmarks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use rstest::rstest;
    use tempfile::TempDir;

    fn sample() -> Vec<Bookmark> {
        let at = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        vec![Bookmark::new(
            "Rust".to_string(),
            "https://rust-lang.org".to_string(),
            "dev".to_string(),
            String::new(),
            at,
        )]
    }

    #[rstest]
    #[case(2024, 1, 2, 3, 4, 5, "bookmarks_20240102_030405.json")]
    #[case(2023, 12, 31, 23, 59, 59, "bookmarks_20231231_235959.json")]
    fn test_export_filename(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
        #[case] minute: u32,
        #[case] second: u32,
        #[case] expected: &str,
    ) {
        let now = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .unwrap();
        assert_eq!(export_filename(&now), expected);
    }

    #[test]
    fn test_export_filename_uses_given_offset() {
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2024, 1, 1, 20, 0, 0)
            .unwrap()
            .with_timezone(&seoul);
        assert_eq!(export_filename(&now), "bookmarks_20240102_050000.json");
    }

    #[test]
    fn test_export_empty_collection_fails() {
        let result = export_bookmarks(&[]);
        assert!(matches!(result, Err(MarkshelfError::EmptyCollection)));
    }

    #[test]
    fn test_export_is_pretty_json_array() {
        let bookmarks = sample();
        let bundle = export_bookmarks(&bookmarks).unwrap();

        assert_eq!(bundle.count, 1);
        assert!(bundle.contents.starts_with("[\n  {"));
        assert!(bundle.filename.starts_with("bookmarks_"));
        assert!(bundle.filename.ends_with(".json"));

        let parsed: Vec<Bookmark> = serde_json::from_str(&bundle.contents).unwrap();
        assert_eq!(parsed, bookmarks);
    }

    #[test]
    fn test_write_export() {
        let dir = TempDir::new().unwrap();
        let bundle = export_bookmarks(&sample()).unwrap();

        let path = write_export(&bundle, dir.path()).unwrap();
        assert_eq!(path, dir.path().join(&bundle.filename));
        assert_eq!(fs::read_to_string(path).unwrap(), bundle.contents);
    }
}
