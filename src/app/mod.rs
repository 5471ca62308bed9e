// Application layer: turns one CLI command into one line of output.

use crate::config::toml_config::FormatConfig;
use crate::config::{CliConfig, Command};
use crate::core::Formatter;
use crate::domain::model::{AvailabilityMap, Booking, InstantInput, MinutesInput};
use crate::domain::ports::{Clock, FixedClock, SystemClock};
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::validate_date_key;
use std::io::Read;

/// 載入配置檔 (若有指定) 並建立 Formatter
pub fn build_formatter(cli: &CliConfig) -> Result<Formatter> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            FormatConfig::from_file(path)?
        }
        None => FormatConfig::default(),
    };
    Formatter::new(&config)
}

pub fn run(command: &Command, formatter: &Formatter) -> Result<String> {
    match command {
        Command::Date { instant } => {
            Ok(formatter.date_time(instant.as_deref().map(InstantInput::Text)))
        }
        Command::Duration { minutes } => {
            let minutes = minutes.as_deref().map(MinutesInput::from);
            Ok(formatter.duration(minutes.as_ref()))
        }
        Command::Phone { number } => Ok(formatter.phone(number)),
        Command::Countdown { target, now } => {
            let clock = clock_for(formatter, now.as_deref())?;
            formatter.try_countdown(InstantInput::Text(target), clock.as_ref())
        }
        Command::Toggle { map, date_key } => {
            validate_date_key("date_key", date_key)?;
            let map: AvailabilityMap = serde_json::from_str(map)?;
            Ok(serde_json::to_string(&map.toggled(date_key))?)
        }
        Command::Booking { input, now } => {
            let clock = clock_for(formatter, now.as_deref())?;
            let booking: Booking = serde_json::from_str(&read_input(input)?)?;
            let summary = formatter.summarize(&booking, clock.as_ref());
            Ok(serde_json::to_string_pretty(&summary)?)
        }
    }
}

fn clock_for(formatter: &Formatter, now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        None => Ok(Box::new(SystemClock)),
        Some(text) => formatter
            .resolve(InstantInput::Text(text))
            .map(|at| Box::new(FixedClock(at)) as Box<dyn Clock>)
            .ok_or_else(|| FormatError::InvalidInstant {
                input: text.to_string(),
            }),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
