use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use kernel::model::{
    booking::event::{CancelBooking, CreateBooking},
    id::{BookingId, EventId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingCreatedResponse, BookingGroupsResponse, BookingTicketResponse,
        CancelBookingResponse,
    },
};

pub async fn book_ticket(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let booking_id = registry
        .booking_repository()
        .create(CreateBooking::new(event_id, user.id()))
        .await?;

    Ok((StatusCode::CREATED, Json(BookingCreatedResponse { booking_id })))
}

pub async fn show_my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingGroupsResponse>> {
    let bookings = registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await?;

    Ok(Json(BookingGroupsResponse::group(bookings, Utc::now())))
}

pub async fn show_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingTicketResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id, user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;

    Ok(Json(BookingTicketResponse::from_booking(
        booking,
        user.user.name,
    )))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CancelBookingResponse>> {
    let booking = registry
        .booking_repository()
        .cancel(CancelBooking::new(booking_id, user.id()))
        .await?;

    Ok(Json(CancelBookingResponse {
        message: format!(
            "Ticket for '{}' has been cancelled successfully.",
            booking.event.title
        ),
    }))
}
