use derive_new::new;

use crate::model::id::{EventId, UserId};

#[derive(new)]
pub struct ToggleBookmark {
    pub event_id: EventId,
    pub user_id: UserId,
}
