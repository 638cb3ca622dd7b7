use chrono::{DateTime, Utc};

use crate::model::{
    id::{BookmarkId, EventId},
    user::BookmarkUser,
};

pub mod event;

#[derive(Debug)]
pub struct Bookmark {
    pub bookmark_id: BookmarkId,
    pub event_id: EventId,
    pub user: BookmarkUser,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a toggle: the state the pair is in afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkState {
    Bookmarked,
    Unbookmarked,
}

impl BookmarkState {
    pub fn is_bookmarked(self) -> bool {
        matches!(self, Self::Bookmarked)
    }
}
