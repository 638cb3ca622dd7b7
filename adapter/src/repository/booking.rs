use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        Attendee, Booking, CANCEL_CUTOFF_DAYS,
    },
    id::{BookingId, EventId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::booking::{AttendeeRow, BookingRow, BOOKING_COLUMNS, BOOKING_FROM},
    ConnectionPool,
};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // the event must still exist when the booking lands
        let exists: Option<(EventId,)> =
            sqlx::query_as("SELECT event_id FROM events WHERE event_id = $1")
                .bind(event.event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        if exists.is_none() {
            return Err(AppError::EntityNotFound("event not found".into()));
        }

        // no capacity limit and no duplicate check: a user may book the
        // same event any number of times
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings (booking_id, event_id, user_id)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(booking_id)
        .bind(event.event_id)
        .bind(event.booked_by)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        // scoping by user hides foreign bookings behind the same not-found
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} {BOOKING_FROM} WHERE b.booking_id = $1 AND b.user_id = $2"
        );
        let row: Option<BookingRow> = sqlx::query_as(&sql)
            .bind(event.booking_id)
            .bind(event.requested_user)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::EntityNotFound("booking not found".into()));
        };

        let mut booking = Booking::from(row);
        if booking.is_cancelled {
            return Err(AppError::UnprocessableEntity(
                "this ticket has already been cancelled".into(),
            ));
        }

        let now = Utc::now();
        if !booking.can_cancel(now) {
            return Err(AppError::UnprocessableEntity(format!(
                "cannot cancel ticket: must be at least {CANCEL_CUTOFF_DAYS} days before the event"
            )));
        }

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET is_cancelled = TRUE, cancelled_at = $1
                WHERE booking_id = $2
            "#,
        )
        .bind(now)
        .bind(booking.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been cancelled".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        booking.is_cancelled = true;
        booking.cancelled_at = Some(now);
        Ok(booking)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} {BOOKING_FROM} WHERE b.user_id = $1 ORDER BY b.booked_at ASC"
        );
        let rows: Vec<BookingRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_id(
        &self,
        booking_id: BookingId,
        user_id: UserId,
    ) -> AppResult<Option<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} {BOOKING_FROM} WHERE b.booking_id = $1 AND b.user_id = $2"
        );
        let row: Option<BookingRow> = sqlx::query_as(&sql)
            .bind(booking_id)
            .bind(user_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn find_attendees_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Attendee>> {
        let rows: Vec<AttendeeRow> = sqlx::query_as(
            r#"
                SELECT
                    u.name AS user_name,
                    b.booked_at,
                    b.is_cancelled
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                WHERE b.event_id = $1
                ORDER BY b.booked_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Attendee::from).collect())
    }
}
