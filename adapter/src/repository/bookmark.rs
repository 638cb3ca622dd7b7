use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    bookmark::{event::ToggleBookmark, Bookmark, BookmarkState},
    event::Event,
    id::{BookmarkId, EventId, UserId},
};
use kernel::repository::bookmark::BookmarkRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{
        bookmark::BookmarkRow,
        event::{EventRow, EVENT_COLUMNS},
    },
    ConnectionPool,
};

#[derive(new)]
pub struct BookmarkRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryImpl {
    async fn toggle(&self, event: ToggleBookmark) -> AppResult<BookmarkState> {
        let existing: Option<(BookmarkId,)> = sqlx::query_as(
            r#"
                SELECT bookmark_id
                FROM bookmarks
                WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(event.user_id)
        .bind(event.event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if let Some((bookmark_id,)) = existing {
            sqlx::query("DELETE FROM bookmarks WHERE bookmark_id = $1")
                .bind(bookmark_id)
                .execute(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

            return Ok(BookmarkState::Unbookmarked);
        }

        // a bookmark must not outlive or precede its event
        let target: Option<(EventId,)> =
            sqlx::query_as("SELECT event_id FROM events WHERE event_id = $1")
                .bind(event.event_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        if target.is_none() {
            return Err(AppError::EntityNotFound("event not found".into()));
        }

        // the unique (user_id, event_id) constraint arbitrates concurrent
        // toggles; losing the race surfaces as a policy failure
        sqlx::query(
            r#"
                INSERT INTO bookmarks (bookmark_id, user_id, event_id)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(BookmarkId::new())
        .bind(event.user_id)
        .bind(event.event_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::UnprocessableEntity("event is already bookmarked".into())
            }
            e => AppError::SpecificOperationError(e),
        })?;

        Ok(BookmarkState::Bookmarked)
    }

    async fn exists(&self, user_id: UserId, event_id: EventId) -> AppResult<bool> {
        sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM bookmarks
                    WHERE user_id = $1 AND event_id = $2
                )
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_event_ids_by_user_id(&self, user_id: UserId) -> AppResult<Vec<EventId>> {
        sqlx::query_scalar("SELECT event_id FROM bookmarks WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_events_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Event>> {
        let sql = format!(
            r#"
                SELECT {EVENT_COLUMNS}
                FROM bookmarks AS m
                INNER JOIN events AS e ON m.event_id = e.event_id
                INNER JOIN users AS u ON e.owned_by = u.user_id
                WHERE m.user_id = $1
                ORDER BY m.created_at DESC
            "#
        );
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Bookmark>> {
        let rows: Vec<BookmarkRow> = sqlx::query_as(
            r#"
                SELECT
                    m.bookmark_id,
                    m.event_id,
                    m.user_id,
                    u.name AS user_name,
                    m.created_at
                FROM bookmarks AS m
                INNER JOIN users AS u ON m.user_id = u.user_id
                WHERE m.event_id = $1
                ORDER BY m.created_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Bookmark::from).collect())
    }
}
