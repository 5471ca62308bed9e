use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An instant as it arrives from callers: already parsed, or raw text from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantInput<'a> {
    At(DateTime<Utc>),
    Text(&'a str),
}

impl From<DateTime<Utc>> for InstantInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        InstantInput::At(value)
    }
}

impl<'a> From<&'a str> for InstantInput<'a> {
    fn from(value: &'a str) -> Self {
        InstantInput::Text(value)
    }
}

/// A minute count, either numeric or as the text a form field produced ("90", "90,5").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinutesInput {
    Number(f64),
    Text(String),
}

impl From<f64> for MinutesInput {
    fn from(value: f64) -> Self {
        MinutesInput::Number(value)
    }
}

impl From<i64> for MinutesInput {
    fn from(value: i64) -> Self {
        MinutesInput::Number(value as f64)
    }
}

impl From<u32> for MinutesInput {
    fn from(value: u32) -> Self {
        MinutesInput::Number(f64::from(value))
    }
}

impl From<&str> for MinutesInput {
    fn from(value: &str) -> Self {
        MinutesInput::Text(value.to_string())
    }
}

/// Date key (`YYYY-MM-DD`) → "open for bookings".
///
/// A key that is missing reads as `false`, so two maps are equal when the
/// same dates are open, whether or not the closed ones are stored explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityMap {
    pub(crate) entries: BTreeMap<String, bool>,
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_available(&self, date_key: &str) -> bool {
        self.entries.get(date_key).copied().unwrap_or(false)
    }

    pub fn with(mut self, date_key: impl Into<String>, available: bool) -> Self {
        self.entries.insert(date_key.into(), available);
        self
    }

    pub fn available_dates(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, open)| **open)
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for AvailabilityMap {
    fn eq(&self, other: &Self) -> bool {
        self.available_dates().eq(other.available_dates())
    }
}

impl Eq for AvailabilityMap {}

impl FromIterator<(String, bool)> for AvailabilityMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A row of the `bookings` collection as the hosted backend returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Booking {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_and_time: Option<String>,
    pub duration: Option<MinutesInput>,
    pub accepted: Option<bool>,
    pub description: Option<String>,
}

/// Display strings for one booking, ready for a page or an email body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub when: String,
    pub date_key: Option<String>,
    pub duration: String,
    pub phone: Option<String>,
    pub countdown: String,
    pub accepted: Option<bool>,
}
