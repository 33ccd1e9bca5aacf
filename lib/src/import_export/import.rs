use crate::error::{MarkshelfError, Result};
use crate::migration;
use crate::models::bookmark::Bookmark;
use crate::store::{BookmarkStore, KeyValueStore};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Fields every imported record must carry as non-empty values
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "title", "url", "category"];

/// Counts describing what a merge did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// False when the caller declined to merge into a non-empty collection
    pub proceeded: bool,
    pub imported_count: usize,
    pub duplicate_count: usize,
    /// Ids of the incoming records that were dropped, in file order
    pub duplicate_ids: Vec<String>,
}

/// Result of merging an import into a collection
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub merged: Vec<Bookmark>,
    pub report: ImportReport,
}

/// Check that `record` is an object with every required field present and
/// non-empty. Numeric ids are rewritten to their string form.
fn validate_entry(index: usize, record: &mut Value) -> Result<()> {
    let Some(object) = record.as_object_mut() else {
        return Err(MarkshelfError::Validation(format!(
            "entry {} is not an object",
            index
        )));
    };

    if let Some(Value::Number(n)) = object.get("id") {
        let id = n.to_string();
        object.insert("id".to_string(), Value::String(id));
    }

    for field in REQUIRED_FIELDS {
        let present = matches!(object.get(field), Some(Value::String(s)) if !s.trim().is_empty());
        if !present {
            return Err(MarkshelfError::Validation(format!(
                "entry {} is missing required field '{}'",
                index, field
            )));
        }
    }
    Ok(())
}

/// Parse, validate, and migrate an import blob.
///
/// Fails with `Parse` for malformed JSON, `Format` when the top level is not
/// an array, and `Validation` when any entry lacks a required field. No
/// records are returned unless every entry passes.
pub fn parse_import(raw: &str) -> Result<Vec<Bookmark>> {
    let parsed: Value = serde_json::from_str(raw)?;
    let Value::Array(mut records) = parsed else {
        return Err(MarkshelfError::Format(
            "bookmark file must contain a JSON array".to_string(),
        ));
    };

    for (index, record) in records.iter_mut().enumerate() {
        validate_entry(index, record)?;
    }

    migration::migrate_records(&mut records);

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|e| MarkshelfError::Parse(format!("entry {}: {}", index, e)))
        })
        .collect()
}

/// Append incoming records whose ids are not already present.
///
/// Existing records are never modified. A repeated id later in `incoming`
/// is dropped as well, so the merged collection keeps ids unique. When
/// `proceed` is false the current collection is returned unchanged.
pub fn merge_bookmarks(current: &[Bookmark], incoming: Vec<Bookmark>, proceed: bool) -> ImportOutcome {
    if !proceed {
        return ImportOutcome {
            merged: current.to_vec(),
            report: ImportReport::default(),
        };
    }

    let incoming_len = incoming.len();
    let mut seen: HashSet<String> = current.iter().map(|b| b.id.clone()).collect();
    let mut merged = current.to_vec();
    let mut duplicate_ids = Vec::new();

    for bookmark in incoming {
        if seen.insert(bookmark.id.clone()) {
            merged.push(bookmark);
        } else {
            duplicate_ids.push(bookmark.id);
        }
    }

    let imported_count = merged.len() - current.len();
    if !duplicate_ids.is_empty() {
        log::warn!(
            "Skipped {} duplicate bookmark id(s) during import",
            duplicate_ids.len()
        );
    }

    ImportOutcome {
        merged,
        report: ImportReport {
            proceeded: true,
            imported_count,
            duplicate_count: incoming_len - imported_count,
            duplicate_ids,
        },
    }
}

/// Parse `raw` and merge it into `current`
pub fn import_bookmarks(raw: &str, current: &[Bookmark], proceed: bool) -> Result<ImportOutcome> {
    let incoming = parse_import(raw)?;
    Ok(merge_bookmarks(current, incoming, proceed))
}

/// Read an import file, rejecting paths without a `.json` extension
pub fn read_import_file(path: &Path) -> Result<String> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(MarkshelfError::Format(format!(
            "only .json files can be imported: {}",
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Validate and merge `raw` into the collection, persisting on success.
    /// Parse, format, and validation failures leave the collection untouched.
    pub fn import(&mut self, raw: &str, proceed: bool) -> Result<ImportReport> {
        let incoming = parse_import(raw)?;
        let ImportOutcome { merged, report } = merge_bookmarks(self.bookmarks(), incoming, proceed);

        // Declined, or every record was a duplicate: nothing new to store
        if report.imported_count > 0 {
            self.commit(|bookmarks| {
                *bookmarks = merged;
                Some(())
            })?;
        }

        if report.proceeded {
            log::info!(
                "Imported {} bookmark(s), {} duplicate(s) skipped",
                report.imported_count,
                report.duplicate_count
            );
        } else {
            log::info!("Import declined, collection unchanged");
        }
        Ok(report)
    }

    /// Read `path` and import it; see [`BookmarkStore::import`]
    pub fn import_file(&mut self, path: &Path, proceed: bool) -> Result<ImportReport> {
        let raw = read_import_file(path)?;
        self.import(&raw, proceed)
    }

    /// Importing into a non-empty collection should be confirmed first
    pub fn import_needs_confirmation(&self) -> bool {
        !self.is_empty()
    }
}
