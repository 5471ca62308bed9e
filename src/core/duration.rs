use super::Formatter;
use crate::domain::model::MinutesInput;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Whole minutes to show, or `None` when there is nothing positive to show.
///
/// Stays in `f64` so that very large counts are split exactly instead of
/// saturating an integer cast.
fn whole_minutes(input: &MinutesInput) -> Option<f64> {
    let value = match input {
        MinutesInput::Number(n) => *n,
        MinutesInput::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.replace(',', ".").parse::<f64>().ok()?
        }
    };

    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    // 小於一分鐘的正值也視為 0
    let minutes = value.floor();
    (minutes >= 1.0).then_some(minutes)
}

// `n` is whole and non-negative; `{}` on a whole f64 prints no decimals.
fn count_part(n: f64, singular: &str, plural: &str) -> Option<String> {
    if n == 0.0 {
        None
    } else if n == 1.0 {
        Some(format!("1 {}", singular))
    } else {
        Some(format!("{} {}", n, plural))
    }
}

impl Formatter {
    /// "2 timer, 15 minutter", "1 time", "45 minutter"; anything unusable is
    /// the zero-duration phrase.
    pub fn duration(&self, total_minutes: Option<&MinutesInput>) -> String {
        let vocab = &self.vocabulary;
        let Some(minutes) = total_minutes.and_then(whole_minutes) else {
            return vocab.zero_duration.clone();
        };

        let hours = (minutes / MINUTES_PER_HOUR).floor();
        let mins = minutes % MINUTES_PER_HOUR;

        let hour_part = count_part(hours, &vocab.hour_singular, &vocab.hour_plural);
        let minute_part = count_part(mins, &vocab.minute_singular, &vocab.minute_plural);

        match (hour_part, minute_part) {
            (Some(h), Some(m)) => format!("{}, {}", h, m),
            (Some(part), None) | (None, Some(part)) => part,
            (None, None) => vocab.zero_duration.clone(),
        }
    }
}
