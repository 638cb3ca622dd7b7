use chrono::{DateTime, Utc};

use crate::model::id::{BookingId, EventId, UserId};

pub mod event;

/// Cancellation closes this many days before the event starts.
pub const CANCEL_CUTOFF_DAYS: i64 = 5;

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: UserId,
    pub booked_at: DateTime<Utc>,
    pub is_cancelled: bool,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub event: BookingEvent,
}

#[derive(Debug)]
pub struct BookingEvent {
    pub event_id: EventId,
    pub title: String,
    pub city: String,
    pub image: String,
    pub starts_at: DateTime<Utc>,
}

impl Booking {
    /// A booking stays cancellable while at least `CANCEL_CUTOFF_DAYS`
    /// whole days remain before the event starts.
    pub fn can_cancel(&self, now: DateTime<Utc>) -> bool {
        if self.is_cancelled {
            return false;
        }
        (self.event.starts_at - now).num_days() >= CANCEL_CUTOFF_DAYS
    }
}

/// One row of an organizer's attendee list.
#[derive(Debug)]
pub struct Attendee {
    pub user_name: String,
    pub booked_at: DateTime<Utc>,
    pub is_cancelled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking_starting_in(now: DateTime<Utc>, until_start: Duration, is_cancelled: bool) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            booked_by: UserId::new(),
            booked_at: now - Duration::days(1),
            is_cancelled,
            cancelled_at: None,
            event: BookingEvent {
                event_id: EventId::new(),
                title: "Jazz Night".into(),
                city: "Paris".into(),
                image: "/static/images/default_music.jpg".into(),
                starts_at: now + until_start,
            },
        }
    }

    #[test]
    fn exactly_five_days_before_is_cancellable() {
        let now = Utc::now();
        let booking = booking_starting_in(now, Duration::days(5), false);
        assert!(booking.can_cancel(now));
    }

    #[test]
    fn four_days_twenty_three_hours_is_not_cancellable() {
        let now = Utc::now();
        let booking = booking_starting_in(now, Duration::days(4) + Duration::hours(23), false);
        assert!(!booking.can_cancel(now));
    }

    #[test]
    fn far_future_booking_is_cancellable() {
        let now = Utc::now();
        let booking = booking_starting_in(now, Duration::days(30), false);
        assert!(booking.can_cancel(now));
    }

    #[test]
    fn already_cancelled_booking_is_not_cancellable() {
        let now = Utc::now();
        let booking = booking_starting_in(now, Duration::days(30), true);
        assert!(!booking.can_cancel(now));
    }
}
