pub mod availability;
pub mod booking;
pub mod countdown;
pub mod datetime;
pub mod duration;
pub mod instant;
pub mod phone;

pub use crate::domain::model::{AvailabilityMap, Booking, BookingSummary, InstantInput, MinutesInput};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;

use crate::config::toml_config::{FormatConfig, Vocabulary};
use crate::utils::validation::Validate;
use chrono_tz::Tz;
use std::sync::LazyLock;

/// Formats booking values for display with one timezone and one set of words.
///
/// Built once from a [`FormatConfig`] and shared; every method is pure apart
/// from reading the clock it is handed.
#[derive(Debug, Clone)]
pub struct Formatter {
    tz: Tz,
    placeholder: String,
    vocabulary: Vocabulary,
}

impl Formatter {
    pub fn new(config: &FormatConfig) -> Result<Self> {
        config.validate()?;
        let tz = config.timezone()?;
        tracing::debug!("Formatter configured for timezone {}", tz.name());

        Ok(Self {
            tz,
            placeholder: config.locale.placeholder.clone(),
            vocabulary: config.vocabulary.clone(),
        })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Default for Formatter {
    fn default() -> Self {
        let config = FormatConfig::default();
        Self {
            tz: chrono_tz::Europe::Copenhagen,
            placeholder: config.locale.placeholder,
            vocabulary: config.vocabulary,
        }
    }
}

static DEFAULT_FORMATTER: LazyLock<Formatter> = LazyLock::new(Formatter::default);

/// Danish wording, Europe/Copenhagen.
pub fn default_formatter() -> &'static Formatter {
    &DEFAULT_FORMATTER
}

pub fn format_date_time(instant: Option<InstantInput<'_>>) -> String {
    default_formatter().date_time(instant)
}

pub fn format_duration(total_minutes: Option<&MinutesInput>) -> String {
    default_formatter().duration(total_minutes)
}

pub fn format_phone(phone_number: &str) -> String {
    phone::format_phone(phone_number)
}

/// Countdown to `target` from the system clock; unreadable targets show the placeholder.
pub fn format_countdown(target: &str) -> String {
    default_formatter().countdown(InstantInput::Text(target), &SystemClock)
}

pub fn try_format_countdown(target: &str) -> Result<String> {
    default_formatter().try_countdown(InstantInput::Text(target), &SystemClock)
}

pub fn toggle_availability(map: &AvailabilityMap, date_key: &str) -> AvailabilityMap {
    map.toggled(date_key)
}
