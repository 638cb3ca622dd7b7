use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    bookmark::{event::ToggleBookmark, Bookmark, BookmarkState},
    event::Event,
    id::{EventId, UserId},
};

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn toggle(&self, event: ToggleBookmark) -> AppResult<BookmarkState>;
    async fn exists(&self, user_id: UserId, event_id: EventId) -> AppResult<bool>;
    async fn find_event_ids_by_user_id(&self, user_id: UserId) -> AppResult<Vec<EventId>>;
    // The user's bookmarked events, newest bookmark first.
    async fn find_events_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Event>>;
    // Caller is responsible for the ownership gate on the event.
    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Bookmark>>;
}
