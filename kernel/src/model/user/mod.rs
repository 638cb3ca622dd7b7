use chrono::{DateTime, Utc};

use crate::model::id::UserId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct EventOwner {
    pub owner_id: UserId,
    pub owner_name: String,
}

#[derive(Debug)]
pub struct BookmarkUser {
    pub user_id: UserId,
    pub user_name: String,
}
