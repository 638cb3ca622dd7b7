use chrono::{DateTime, Utc};
use kernel::model::{
    bookmark::Bookmark,
    id::{BookmarkId, EventId, UserId},
    user::BookmarkUser,
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct BookmarkRow {
    pub bookmark_id: BookmarkId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookmarkRow> for Bookmark {
    fn from(value: BookmarkRow) -> Self {
        let BookmarkRow {
            bookmark_id,
            event_id,
            user_id,
            user_name,
            created_at,
        } = value;
        Bookmark {
            bookmark_id,
            event_id,
            user: BookmarkUser { user_id, user_name },
            created_at,
        }
    }
}
