use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        Attendee, Booking,
    },
    id::{BookingId, EventId, UserId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // Enforces the cancellation policy; returns the cancelled booking.
    async fn cancel(&self, event: CancelBooking) -> AppResult<Booking>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
    // Scoped to the requesting user so foreign bookings stay invisible.
    async fn find_by_id(&self, booking_id: BookingId, user_id: UserId)
        -> AppResult<Option<Booking>>;
    // Caller is responsible for the ownership gate on the event.
    async fn find_attendees_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Attendee>>;
}
