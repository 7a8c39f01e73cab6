//! Journal entry model.
//!
//! # Responsibility
//! - Define the persisted shape of one journal post.
//! - Normalize titles so rendering branches on presence, not on truthiness.
//!
//! # Invariants
//! - `image_uri` and `address` are non-empty for every persisted entry.
//! - `title` is `None` or a trimmed non-empty string.
//! - `date` is fixed at creation and never rewritten.
//!
//! # Storage shape
//! Entries are stored as `{ "title", "imageUri", "address", "date" }`; a
//! missing title is written as `""` so older readers keep working.

use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One persisted journal post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(
        default,
        serialize_with = "serialize_title",
        deserialize_with = "deserialize_title"
    )]
    pub title: Option<String>,
    pub image_uri: String,
    pub address: String,
    pub date: String,
}

/// Validation errors for entry invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingImageUri,
    MissingAddress,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingImageUri => write!(f, "entry image_uri must not be empty"),
            Self::MissingAddress => write!(f, "entry address must not be empty"),
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Builds an entry stamped with today's local date.
    pub fn new(
        title: Option<&str>,
        image_uri: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self::with_date(title, image_uri, address, format_entry_date(&Local::now()))
    }

    /// Builds an entry with a caller-provided display date.
    pub fn with_date(
        title: Option<&str>,
        image_uri: impl Into<String>,
        address: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.and_then(normalize_title),
            image_uri: image_uri.into(),
            address: address.into(),
            date: date.into(),
        }
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    /// Replaces the title; whitespace-only input clears it.
    pub fn rename(&mut self, new_title: &str) {
        self.title = normalize_title(new_title);
    }

    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.image_uri.trim().is_empty() {
            return Err(EntryValidationError::MissingImageUri);
        }
        if self.address.trim().is_empty() {
            return Err(EntryValidationError::MissingAddress);
        }
        Ok(())
    }
}

/// Trims a title; returns `None` when nothing is left.
pub fn normalize_title(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a timestamp as a US short date without zero padding (`7/4/2024`).
pub fn format_entry_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!("{}/{}/{}", at.month(), at.day(), at.year())
}

fn serialize_title<S: Serializer>(title: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(title.as_deref().unwrap_or(""))
}

fn deserialize_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(normalize_title))
}

#[cfg(test)]
mod tests {
    use super::{format_entry_date, Entry, EntryValidationError};
    use chrono::{TimeZone, Utc};

    #[test]
    fn blank_title_is_normalized_to_none() {
        let entry = Entry::with_date(Some("   "), "file:///a.jpg", "Lisbon, Lisbon, Portugal", "1/2/2024");
        assert_eq!(entry.title, None);
        assert!(!entry.has_title());
    }

    #[test]
    fn rename_trims_and_allows_clearing() {
        let mut entry = Entry::with_date(None, "file:///a.jpg", "Oslo, Oslo, Norway", "1/2/2024");
        entry.rename("  Fjord day ");
        assert_eq!(entry.title.as_deref(), Some("Fjord day"));
        entry.rename("");
        assert_eq!(entry.title, None);
    }

    #[test]
    fn serializes_missing_title_as_empty_string() {
        let entry = Entry::with_date(None, "file:///a.jpg", "Oslo, Oslo, Norway", "1/2/2024");
        let json = serde_json::to_value(&entry).expect("serialize entry");
        assert_eq!(json["title"], "");
        assert_eq!(json["imageUri"], "file:///a.jpg");
    }

    #[test]
    fn deserializes_empty_null_and_absent_titles_as_none() {
        for raw in [
            r#"{"title":"","imageUri":"u","address":"a","date":"d"}"#,
            r#"{"title":null,"imageUri":"u","address":"a","date":"d"}"#,
            r#"{"imageUri":"u","address":"a","date":"d"}"#,
        ] {
            let entry: Entry = serde_json::from_str(raw).expect("deserialize entry");
            assert_eq!(entry.title, None, "input: {raw}");
        }
    }

    #[test]
    fn validate_requires_image_and_address() {
        let missing_image = Entry::with_date(None, "", "Oslo, Oslo, Norway", "1/2/2024");
        assert_eq!(
            missing_image.validate(),
            Err(EntryValidationError::MissingImageUri)
        );
        let missing_address = Entry::with_date(None, "file:///a.jpg", " ", "1/2/2024");
        assert_eq!(
            missing_address.validate(),
            Err(EntryValidationError::MissingAddress)
        );
    }

    #[test]
    fn entry_date_has_no_zero_padding() {
        let at = Utc.with_ymd_and_hms(2024, 7, 4, 9, 30, 0).unwrap();
        assert_eq!(format_entry_date(&at), "7/4/2024");
    }
}
