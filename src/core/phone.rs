use super::Formatter;
use regex::Regex;
use std::sync::LazyLock;

// ASCII digits only; `\d` would also match other scripts' digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+([0-9]{2}) ?([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})$")
        .expect("phone pattern is a valid regex")
});

/// `+4512345678` → `+45 12 34 56 78`. Anything else comes back untouched.
pub fn format_phone(phone_number: &str) -> String {
    match PHONE_PATTERN.captures(phone_number) {
        Some(caps) => format!(
            "+{} {} {} {} {}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
        ),
        None => phone_number.to_string(),
    }
}

impl Formatter {
    pub fn phone(&self, phone_number: &str) -> String {
        format_phone(phone_number)
    }
}
