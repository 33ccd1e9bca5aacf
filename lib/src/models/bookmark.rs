use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Represents a bookmark with all its metadata
///
/// Serialized with camelCase keys. Fields outside the known schema are kept in
/// `extra` so that newer data survives a load/save cycle untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default = "unix_epoch", deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "unix_epoch", deserialize_with = "lenient_timestamp")]
    pub updated_at: DateTime<Utc>,
    pub is_favorite: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339 first, then ISO-8601 forms without an offset (read as UTC).
/// Null falls back to the epoch like a missing field.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(unix_epoch());
    };
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl Bookmark {
    /// Create a new Bookmark with a fresh id, both timestamps set to `now`
    pub fn new(
        title: String,
        url: String,
        category: String,
        description: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_id(),
            title,
            url,
            category,
            description,
            created_at: now,
            updated_at: now,
            is_favorite: false,
            extra: Map::new(),
        }
    }

    /// Refresh `updated_at`, never letting it fall behind `created_at`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

/// Collision-resistant opaque identifier for new records
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn sample() -> Bookmark {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Bookmark::new(
            "Example".to_string(),
            "https://example.com".to_string(),
            "dev".to_string(),
            "A test bookmark".to_string(),
            now,
        )
    }

    #[test]
    fn test_bookmark_creation() {
        let bookmark = sample();

        assert!(!bookmark.id.is_empty());
        assert_eq!(bookmark.title, "Example");
        assert_eq!(bookmark.created_at, bookmark.updated_at);
        assert!(!bookmark.is_favorite);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = sample();
        let b = sample();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_bookmark_serialization_uses_camel_case() {
        let bookmark = sample();

        let json = serde_json::to_string(&bookmark).unwrap();
        assert!(json.contains("\"isFavorite\":false"));
        assert!(json.contains("\"createdAt\":\"2024-03-01T12:00:00Z\""));
        assert!(json.contains("\"url\":\"https://example.com\""));

        let deserialized: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(bookmark, deserialized);
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let json = r#"{
            "id": "1", "title": "t", "url": "u", "category": "c",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "isFavorite": true,
            "color": "red"
        }"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.extra.get("color"), Some(&Value::from("red")));

        let back = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(back["color"], "red");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":"1","title":"t","url":"u","category":"c","isFavorite":false}"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.description, "");
        assert_eq!(bookmark.created_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let json = r#"{"id":"1","title":"t","url":"u","category":"c","description":null,"isFavorite":false}"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.description, "");
    }

    #[rstest]
    #[case("2024-01-01T09:30:00.000Z", (2024, 1, 1, 9, 30, 0))]
    #[case("2024-01-01T18:30:00+09:00", (2024, 1, 1, 9, 30, 0))]
    #[case("2024-01-01T09:30:00", (2024, 1, 1, 9, 30, 0))]
    #[case("2024-01-01T09:30:00.250", (2024, 1, 1, 9, 30, 0))]
    #[case("2024-01-01 09:30:00", (2024, 1, 1, 9, 30, 0))]
    #[case("2024-01-01T09:30", (2024, 1, 1, 9, 30, 0))]
    #[case("2024-01-01", (2024, 1, 1, 0, 0, 0))]
    fn test_iso_timestamps_are_accepted(
        #[case] raw: &str,
        #[case] expected: (i32, u32, u32, u32, u32, u32),
    ) {
        let (y, mo, d, h, mi, s) = expected;
        let json = format!(
            r#"{{"id":"1","title":"t","url":"u","category":"c","createdAt":"{}","updatedAt":null,"isFavorite":false}}"#,
            raw
        );
        let bookmark: Bookmark = serde_json::from_str(&json).unwrap();
        let expected = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
        assert_eq!(bookmark.created_at.timestamp(), expected.timestamp());
        assert_eq!(bookmark.updated_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_unparseable_timestamp_is_an_error() {
        let json = r#"{"id":"1","title":"t","url":"u","category":"c","createdAt":"yesterday","isFavorite":false}"#;
        assert!(serde_json::from_str::<Bookmark>(json).is_err());
    }

    #[test]
    fn test_touch_never_precedes_creation() {
        let mut bookmark = sample();
        let earlier = bookmark.created_at - chrono::Duration::days(1);
        bookmark.touch(earlier);
        assert_eq!(bookmark.updated_at, bookmark.created_at);

        let later = bookmark.created_at + chrono::Duration::hours(1);
        bookmark.touch(later);
        assert_eq!(bookmark.updated_at, later);
    }
}
