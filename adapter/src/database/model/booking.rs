use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{Attendee, Booking, BookingEvent},
    id::{BookingId, EventId, UserId},
};
use sqlx::FromRow;

/// Booking columns joined with the booked event's summary.
pub(crate) const BOOKING_COLUMNS: &str = r#"
    b.booking_id,
    b.user_id,
    b.booked_at,
    b.is_cancelled,
    b.cancelled_at,
    e.event_id,
    e.title,
    e.city,
    e.image,
    e.starts_at
"#;

pub(crate) const BOOKING_FROM: &str =
    "FROM bookings AS b INNER JOIN events AS e ON b.event_id = e.event_id";

#[derive(FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub booked_at: DateTime<Utc>,
    pub is_cancelled: bool,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub event_id: EventId,
    pub title: String,
    pub city: String,
    pub image: String,
    pub starts_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            booked_at,
            is_cancelled,
            cancelled_at,
            event_id,
            title,
            city,
            image,
            starts_at,
        } = value;
        Booking {
            booking_id,
            booked_by: user_id,
            booked_at,
            is_cancelled,
            cancelled_at,
            event: BookingEvent {
                event_id,
                title,
                city,
                image,
                starts_at,
            },
        }
    }
}

#[derive(FromRow)]
pub struct AttendeeRow {
    pub user_name: String,
    pub booked_at: DateTime<Utc>,
    pub is_cancelled: bool,
}

impl From<AttendeeRow> for Attendee {
    fn from(value: AttendeeRow) -> Self {
        let AttendeeRow {
            user_name,
            booked_at,
            is_cancelled,
        } = value;
        Attendee {
            user_name,
            booked_at,
            is_cancelled,
        }
    }
}
