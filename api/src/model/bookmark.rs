use chrono::{DateTime, Utc};
use kernel::model::bookmark::{Bookmark, BookmarkState};
use serde::Serialize;

use super::event::EventSummaryResponse;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBookmarkResponse {
    pub bookmarked: bool,
}

impl From<BookmarkState> for ToggleBookmarkResponse {
    fn from(value: BookmarkState) -> Self {
        Self {
            bookmarked: value.is_bookmarked(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBookmarksResponse {
    pub event: EventSummaryResponse,
    pub items: Vec<EventBookmarkResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBookmarkResponse {
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Bookmark> for EventBookmarkResponse {
    fn from(value: Bookmark) -> Self {
        Self {
            user_name: value.user.user_name,
            created_at: value.created_at,
        }
    }
}
