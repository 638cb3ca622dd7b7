use chrono::{DateTime, Utc};

use crate::model::{id::EventId, user::EventOwner};

pub mod event;

#[derive(Debug)]
pub struct Event {
    pub event_id: EventId,
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
    pub created_at: DateTime<Utc>,
    pub owner: EventOwner,
}

/// An organizer's own event together with its sales counters.
#[derive(Debug)]
pub struct OwnedEventStats {
    pub event: Event,
    pub tickets_sold: i64,
    pub bookmarks_count: i64,
}

impl OwnedEventStats {
    /// Revenue is always derived from the current ticket price.
    pub fn revenue(&self) -> i64 {
        self.tickets_sold * self.event.ticket_price
    }
}

/// Fallback artwork served when an upload fails or none was provided.
pub fn default_image_for(category: &str) -> &'static str {
    match category.to_ascii_lowercase().as_str() {
        "music" => "/static/images/default_music.jpg",
        "conference" => "/static/images/default_conference.jpg",
        "sport" => "/static/images/default_sport.jpg",
        "theatre" => "/static/images/default_theatre.jpg",
        "workshop" => "/static/images/default_workshop.jpg",
        "festival" => "/static/images/default_festival.jpg",
        _ => "/static/images/default_generic.jpg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::UserId;

    #[test]
    fn default_image_ignores_category_case() {
        assert_eq!(default_image_for("Music"), "/static/images/default_music.jpg");
        assert_eq!(default_image_for("CONFERENCE"), "/static/images/default_conference.jpg");
    }

    #[test]
    fn unknown_category_falls_back_to_generic() {
        assert_eq!(default_image_for("opera"), "/static/images/default_generic.jpg");
        assert_eq!(default_image_for(""), "/static/images/default_generic.jpg");
    }

    #[test]
    fn revenue_is_tickets_sold_times_current_price() {
        let stats = OwnedEventStats {
            event: Event {
                event_id: EventId::new(),
                title: "Jazz Night".into(),
                city: "Paris".into(),
                address: "123 Rue de Test".into(),
                pincode: 75001,
                category: "Music".into(),
                description: "An evening of jazz".into(),
                image: "/static/images/default_music.jpg".into(),
                starts_at: Utc::now(),
                ends_at: Utc::now(),
                ticket_price: 50,
                created_at: Utc::now(),
                owner: EventOwner {
                    owner_id: UserId::new(),
                    owner_name: "John".into(),
                },
            },
            tickets_sold: 3,
            bookmarks_count: 1,
        };
        assert_eq!(stats.revenue(), 150);
    }
}
