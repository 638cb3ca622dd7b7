use chrono::{DateTime, Utc};
use kernel::model::{id::UserId, user::User};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            name,
            email,
            created_at,
        } = value;
        User {
            user_id,
            name,
            email,
            created_at,
        }
    }
}

// Credential lookup for login; never leaves the adapter.
#[derive(FromRow)]
pub struct UserCredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}
