use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    analytics::EventSales,
    event::{
        event::{CreateEvent, DeleteEvent, SearchEvents, SearchField, UpdateTicketPrice},
        Event, OwnedEventStats,
    },
    id::{EventId, UserId},
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::event::{EventRow, EventSalesRow, OwnedEventStatsRow, EVENT_COLUMNS, EVENT_FROM},
    ConnectionPool,
};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let event_id = EventId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO events
                (event_id, title, city, address, pincode, category,
                 description, image, starts_at, ends_at, ticket_price, owned_by)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(event_id)
        .bind(&event.title)
        .bind(&event.city)
        .bind(&event.address)
        .bind(event.pincode)
        .bind(&event.category)
        .bind(&event.description)
        .bind(&event.image)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.ticket_price)
        .bind(event.owned_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no event record has been created".into(),
            ));
        }

        Ok(event_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} {EVENT_FROM} ORDER BY e.created_at DESC");
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} {EVENT_FROM} WHERE e.event_id = $1");
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(event_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    async fn find_owned_by_id(
        &self,
        event_id: EventId,
        owner_id: UserId,
    ) -> AppResult<Option<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} {EVENT_FROM} WHERE e.event_id = $1 AND e.owned_by = $2"
        );
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(event_id)
            .bind(owner_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    async fn search(&self, filter: SearchEvents) -> AppResult<Vec<Event>> {
        let sql = format!(
            r#"
                SELECT {EVENT_COLUMNS} {EVENT_FROM}
                WHERE ($1::text IS NULL
                       OR ($2 = 'title' AND e.title ILIKE $1)
                       OR ($2 = 'city' AND e.city ILIKE $1)
                       OR ($2 = 'both' AND (e.title ILIKE $1 OR e.city ILIKE $1)))
                  AND ($3::timestamptz IS NULL
                       OR (e.starts_at >= $3 AND e.starts_at < $4))
                ORDER BY e.created_at DESC
            "#
        );

        let pattern = filter.text.as_deref().map(|text| format!("%{text}%"));
        let field = match filter.field {
            SearchField::Title => "title",
            SearchField::City => "city",
            SearchField::TitleOrCity => "both",
        };
        let (from, until) = match filter.starts_within {
            Some((from, until)) => (Some(from), Some(until)),
            None => (None, None),
        };

        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .bind(pattern)
            .bind(field)
            .bind(from)
            .bind(until)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_owned_with_stats(&self, owner_id: UserId) -> AppResult<Vec<OwnedEventStats>> {
        let sql = format!(
            r#"
                SELECT {EVENT_COLUMNS},
                    (SELECT COUNT(*) FROM bookings AS b
                     WHERE b.event_id = e.event_id) AS tickets_sold,
                    (SELECT COUNT(*) FROM bookmarks AS m
                     WHERE m.event_id = e.event_id) AS bookmarks_count
                {EVENT_FROM}
                WHERE e.owned_by = $1
                ORDER BY e.created_at DESC
            "#
        );
        let rows: Vec<OwnedEventStatsRow> = sqlx::query_as(&sql)
            .bind(owner_id)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(OwnedEventStats::from).collect())
    }

    async fn find_sales_by_owner(&self, owner_id: UserId) -> AppResult<Vec<EventSales>> {
        // ascending creation order keeps ranked-list tie-breaking aligned
        // with the organizer's original event order
        let rows: Vec<EventSalesRow> = sqlx::query_as(
            r#"
                SELECT
                    e.event_id,
                    e.title,
                    e.category,
                    e.ticket_price,
                    (SELECT COUNT(*) FROM bookings AS b
                     WHERE b.event_id = e.event_id) AS tickets_sold
                FROM events AS e
                WHERE e.owned_by = $1
                ORDER BY e.created_at ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(EventSales::from).collect())
    }

    async fn update_ticket_price(&self, event: UpdateTicketPrice) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE events
                SET ticket_price = $1
                WHERE event_id = $2 AND owned_by = $3
            "#,
        )
        .bind(event.ticket_price)
        .bind(event.event_id)
        .bind(event.requested_user)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            // non-owners get the same answer as a missing event
            return Err(AppError::EntityNotFound("event not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteEvent) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let owned: Option<(EventId,)> = sqlx::query_as(
            r#"
                SELECT event_id
                FROM events
                WHERE event_id = $1 AND owned_by = $2
            "#,
        )
        .bind(event.event_id)
        .bind(event.requested_user)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if owned.is_none() {
            return Err(AppError::EntityNotFound("event not found".into()));
        }

        // the deletion guard consults the tickets table, not bookings
        let tickets_sold: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tickets WHERE event_id = $1")
                .bind(event.event_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        if tickets_sold > 0 {
            return Err(AppError::UnprocessableEntity(
                "cannot delete event: tickets have already been sold".into(),
            ));
        }

        let res = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event.event_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no event record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
