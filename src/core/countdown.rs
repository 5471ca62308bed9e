use super::Formatter;
use crate::domain::model::InstantInput;
use crate::domain::ports::Clock;
use crate::utils::error::{FormatError, Result};
use chrono::TimeDelta;

const MINUTES_PER_DAY: i64 = 24 * 60;
const MINUTES_PER_HOUR: i64 = 60;

impl Formatter {
    /// Time left until `target`, as days, hours and minutes, always rounded down.
    ///
    /// Fails only when `target` cannot be read as an instant.
    pub fn try_countdown(&self, target: InstantInput<'_>, clock: &dyn Clock) -> Result<String> {
        let target_at = self.resolve(target).ok_or_else(|| FormatError::InvalidInstant {
            input: match target {
                InstantInput::Text(text) => text.to_string(),
                InstantInput::At(dt) => dt.to_rfc3339(),
            },
        })?;

        let now = clock.now();
        let diff = target_at - now;
        if diff <= TimeDelta::zero() {
            return Ok(self.vocabulary.booking_started.clone());
        }

        // num_minutes 向零截斷，diff 為正所以等同 floor
        let total_minutes = diff.num_minutes();
        let days = total_minutes / MINUTES_PER_DAY;
        let hours = (total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
        let minutes = total_minutes % MINUTES_PER_HOUR;

        let vocab = &self.vocabulary;
        Ok(format!(
            "{} {}, {} {}, {} {} {}",
            days,
            vocab.countdown_days,
            hours,
            vocab.countdown_hours,
            minutes,
            vocab.countdown_minutes,
            vocab.countdown_suffix
        ))
    }

    /// Like [`Formatter::try_countdown`], but an unreadable target shows the placeholder.
    pub fn countdown(&self, target: InstantInput<'_>, clock: &dyn Clock) -> String {
        self.try_countdown(target, clock).unwrap_or_else(|e| {
            tracing::warn!("Countdown target not understood: {}", e);
            self.placeholder.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::{DateTime, Utc};

    fn noon() -> FixedClock {
        FixedClock(
            DateTime::parse_from_rfc3339("2024-01-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn test_past_or_present_target_has_started() {
        let f = Formatter::default();
        assert_eq!(
            f.countdown("2024-01-01T11:00:00Z".into(), &noon()),
            "Bookingen er startet"
        );
        assert_eq!(
            f.countdown("2024-01-01T12:00:00Z".into(), &noon()),
            "Bookingen er startet"
        );
    }

    #[test]
    fn test_days_hours_minutes() {
        let f = Formatter::default();
        assert_eq!(
            f.countdown("2024-01-02T15:15:00Z".into(), &noon()),
            "1 Dage, 3 Timer, 15 Minuter indtil bookingen"
        );
        assert_eq!(
            f.countdown("2024-01-02T03:15:00Z".into(), &noon()),
            "0 Dage, 15 Timer, 15 Minuter indtil bookingen"
        );
    }

    #[test]
    fn test_no_zero_suppression() {
        let f = Formatter::default();
        assert_eq!(
            f.countdown("2024-01-08T12:00:00Z".into(), &noon()),
            "7 Dage, 0 Timer, 0 Minuter indtil bookingen"
        );
        assert_eq!(
            f.countdown("2024-01-01T12:00:30Z".into(), &noon()),
            "0 Dage, 0 Timer, 0 Minuter indtil bookingen"
        );
    }

    #[test]
    fn test_rounds_down() {
        let f = Formatter::default();
        assert_eq!(
            f.countdown("2024-01-01T12:01:40Z".into(), &noon()),
            "0 Dage, 0 Timer, 1 Minuter indtil bookingen"
        );
        assert_eq!(
            f.countdown("2024-01-01T12:59:59.999Z".into(), &noon()),
            "0 Dage, 0 Timer, 59 Minuter indtil bookingen"
        );
    }

    #[test]
    fn test_local_wall_clock_target() {
        // 13:30 København = 12:30Z
        assert_eq!(
            Formatter::default().countdown("2024-01-01T13:30".into(), &noon()),
            "0 Dage, 0 Timer, 30 Minuter indtil bookingen"
        );
    }

    #[test]
    fn test_unreadable_target() {
        let f = Formatter::default();
        assert!(matches!(
            f.try_countdown("snart".into(), &noon()),
            Err(FormatError::InvalidInstant { ref input }) if input == "snart"
        ));
        assert_eq!(f.countdown("snart".into(), &noon()), "—");
    }
}
