use super::instant::parse_instant;
use super::Formatter;
use crate::domain::model::InstantInput;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

const DISPLAY_FORMAT: &str = "%d-%m/%Y, %H:%M";
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// `%Y` only renders four plain digits inside this range.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

impl Formatter {
    /// The UTC instant behind `instant`, if it can be read.
    pub fn resolve(&self, instant: InstantInput<'_>) -> Option<DateTime<Utc>> {
        match instant {
            InstantInput::At(dt) => Some(dt),
            InstantInput::Text(text) => parse_instant(text, self.tz),
        }
    }

    fn local(&self, instant: InstantInput<'_>) -> Option<DateTime<Tz>> {
        self.resolve(instant)
            .map(|dt| dt.with_timezone(&self.tz))
            .filter(|local| YEARS.contains(&local.year()))
    }

    /// `DD-MM/YYYY, HH:MM` in the configured timezone, or the placeholder when
    /// there is nothing readable to show.
    pub fn date_time(&self, instant: Option<InstantInput<'_>>) -> String {
        instant
            .and_then(|instant| self.local(instant))
            .map(|local| local.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// Calendar date in the configured timezone, keyed the way [`AvailabilityMap`] is.
    ///
    /// [`AvailabilityMap`]: crate::domain::model::AvailabilityMap
    pub fn date_key(&self, instant: InstantInput<'_>) -> Option<String> {
        self.local(instant)
            .map(|local| local.format(DATE_KEY_FORMAT).to_string())
    }
}
