//! Additive schema migrations applied to raw records before they are decoded.
//!
//! The persisted format has no version field. Each migration checks whether a
//! record already carries the field it introduces and fills in the default
//! only when it is missing.

use serde_json::Value;

/// Field added after the first release; older records lack it
pub const FAVORITE_FIELD: &str = "isFavorite";

/// Default a missing (or null) `isFavorite` to `false`.
/// Returns true when the record was changed.
pub fn migrate_record(record: &mut Value) -> bool {
    let Some(object) = record.as_object_mut() else {
        return false;
    };

    match object.get(FAVORITE_FIELD) {
        Some(Value::Null) | None => {
            object.insert(FAVORITE_FIELD.to_string(), Value::Bool(false));
            true
        }
        Some(_) => false,
    }
}

/// Migrate every record, returning how many were changed
pub fn migrate_records(records: &mut [Value]) -> usize {
    let migrated = records
        .iter_mut()
        .map(migrate_record)
        .filter(|changed| *changed)
        .count();

    if migrated > 0 {
        log::info!("Migrated {} record(s): added missing '{}'", migrated, FAVORITE_FIELD);
    }
    migrated
}
