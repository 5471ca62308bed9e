use crate::utils::error::{FormatError, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_timezone(field_name: &str, name: &str) -> Result<Tz> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Timezone cannot be empty".to_string(),
        });
    }

    trimmed
        .parse::<Tz>()
        .map_err(|e| FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Unknown IANA timezone: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 可用日期的鍵必須是 `YYYY-MM-DD`
pub fn validate_date_key(field_name: &str, key: &str) -> Result<()> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: format!("Expected a YYYY-MM-DD date: {}", e),
        })
}
