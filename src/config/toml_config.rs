use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_timezone, Validate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEZONE: &str = "Europe/Copenhagen";

/// Timezone and wording for every formatter. Each field may be left out of the
/// TOML file; anything missing keeps the Danish default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub locale: LocaleConfig,
    pub vocabulary: Vocabulary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub timezone: String,
    /// Shown in place of a date/time that is missing or unreadable.
    pub placeholder: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            placeholder: "—".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub hour_singular: String,
    pub hour_plural: String,
    pub minute_singular: String,
    pub minute_plural: String,
    pub zero_duration: String,
    pub countdown_days: String,
    pub countdown_hours: String,
    pub countdown_minutes: String,
    pub countdown_suffix: String,
    pub booking_started: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            hour_singular: "time".to_string(),
            hour_plural: "timer".to_string(),
            minute_singular: "minut".to_string(),
            minute_plural: "minutter".to_string(),
            zero_duration: "0 minutter".to_string(),
            countdown_days: "Dage".to_string(),
            countdown_hours: "Timer".to_string(),
            countdown_minutes: "Minuter".to_string(),
            countdown_suffix: "indtil bookingen".to_string(),
            booking_started: "Bookingen er startet".to_string(),
        }
    }
}

impl Vocabulary {
    fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("vocabulary.hour_singular", self.hour_singular.as_str()),
            ("vocabulary.hour_plural", self.hour_plural.as_str()),
            ("vocabulary.minute_singular", self.minute_singular.as_str()),
            ("vocabulary.minute_plural", self.minute_plural.as_str()),
            ("vocabulary.zero_duration", self.zero_duration.as_str()),
            ("vocabulary.countdown_days", self.countdown_days.as_str()),
            ("vocabulary.countdown_hours", self.countdown_hours.as_str()),
            ("vocabulary.countdown_minutes", self.countdown_minutes.as_str()),
            ("vocabulary.countdown_suffix", self.countdown_suffix.as_str()),
            ("vocabulary.booking_started", self.booking_started.as_str()),
        ]
    }
}

impl FormatConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormatError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormatError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STUDIO_TIMEZONE})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormatError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timezone(&self) -> Result<Tz> {
        validate_timezone("locale.timezone", &self.locale.timezone)
    }
}

impl Validate for FormatConfig {
    fn validate(&self) -> Result<()> {
        self.timezone()?;
        validate_non_empty_string("locale.placeholder", &self.locale.placeholder)?;
        for (field, value) in self.vocabulary.fields() {
            validate_non_empty_string(field, value)?;
        }
        Ok(())
    }
}
