#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::FormatConfig;
pub use crate::core::{
    default_formatter, format_countdown, format_date_time, format_duration, format_phone,
    toggle_availability, try_format_countdown, Formatter,
};
pub use domain::model::{AvailabilityMap, Booking, BookingSummary, InstantInput, MinutesInput};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{FormatError, Result};
