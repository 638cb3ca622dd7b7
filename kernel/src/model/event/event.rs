use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::{EventId, UserId};

#[derive(new)]
pub struct CreateEvent {
    pub title: String,
    pub city: String,
    pub address: String,
    pub pincode: i32,
    pub category: String,
    pub description: String,
    pub image: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub ticket_price: i64,
    pub owned_by: UserId,
}

#[derive(Debug)]
pub struct UpdateTicketPrice {
    pub event_id: EventId,
    pub requested_user: UserId,
    pub ticket_price: i64,
}

#[derive(Debug)]
pub struct DeleteEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
}

/// Which columns a free-text search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    City,
    TitleOrCity,
}

impl SearchField {
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("name") => Self::Title,
            Some("location") => Self::City,
            _ => Self::TitleOrCity,
        }
    }
}

#[derive(Debug)]
pub struct SearchEvents {
    pub text: Option<String>,
    pub field: SearchField,
    /// Half-open range restricting `starts_at` to a single calendar day.
    pub starts_within: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_maps_to_search_field() {
        assert_eq!(SearchField::from_selector(Some("name")), SearchField::Title);
        assert_eq!(SearchField::from_selector(Some("location")), SearchField::City);
        assert_eq!(SearchField::from_selector(Some("anything")), SearchField::TitleOrCity);
        assert_eq!(SearchField::from_selector(None), SearchField::TitleOrCity);
    }
}
