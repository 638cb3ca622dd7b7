use derive_new::new;

use crate::model::id::{BookingId, EventId, UserId};

#[derive(new)]
pub struct CreateBooking {
    pub event_id: EventId,
    pub booked_by: UserId,
}

#[derive(new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub requested_user: UserId,
}
