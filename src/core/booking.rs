use super::Formatter;
use crate::domain::model::{Booking, BookingSummary, InstantInput};
use crate::domain::ports::Clock;

impl Formatter {
    /// Formats every display field of a booking row in one pass, reading the
    /// clock once for the countdown.
    pub fn summarize(&self, booking: &Booking, clock: &dyn Clock) -> BookingSummary {
        let start = booking.date_and_time.as_deref().map(InstantInput::Text);

        let countdown = match start {
            Some(target) => self.countdown(target, clock),
            None => self.placeholder.clone(),
        };

        BookingSummary {
            id: booking.id,
            name: booking.name.clone(),
            when: self.date_time(start),
            date_key: start.and_then(|target| self.date_key(target)),
            duration: self.duration(booking.duration.as_ref()),
            phone: booking.phone.as_deref().map(|phone| self.phone(phone)),
            countdown,
            accepted: booking.accepted,
        }
    }
}
