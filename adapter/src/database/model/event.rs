use chrono::{DateTime, Utc};
use kernel::model::{
    analytics::EventSales,
    event::{Event, OwnedEventStats},
    id::{EventId, UserId},
    user::EventOwner,
};
use sqlx::FromRow;

/// Event columns selected by every event read, including the owning
/// user's name. Pairs with [`EventRow`].
pub(crate) const EVENT_COLUMNS: &str = r#"
    e.event_id,
    e.title,
    e.city,
    e.address,
    e.pincode,
    e.category,
    e.description,
    e.image,
    e.starts_at,
    e.ends_at,
    e.ticket_price,
    e.created_at,
    e.owned_by,
    u.name AS owner_name
"#;

pub(crate) const EVENT_FROM: &str =
    "FROM events AS e INNER JOIN users AS u ON e.owned_by = u.user_id";

#[derive(FromRow)]
pub struct EventRow {
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
    pub owned_by: UserId,
    pub owner_name: String,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            title,
            city,
            address,
            pincode,
            category,
            description,
            image,
            starts_at,
            ends_at,
            ticket_price,
            created_at,
            owned_by,
            owner_name,
        } = value;
        Event {
            event_id,
            title,
            city,
            address,
            pincode,
            category,
            description,
            image,
            starts_at,
            ends_at,
            ticket_price,
            created_at,
            owner: EventOwner {
                owner_id: owned_by,
                owner_name,
            },
        }
    }
}

#[derive(FromRow)]
pub struct OwnedEventStatsRow {
    #[sqlx(flatten)]
    pub event: EventRow,
    pub tickets_sold: i64,
    pub bookmarks_count: i64,
}

impl From<OwnedEventStatsRow> for OwnedEventStats {
    fn from(value: OwnedEventStatsRow) -> Self {
        let OwnedEventStatsRow {
            event,
            tickets_sold,
            bookmarks_count,
        } = value;
        OwnedEventStats {
            event: event.into(),
            tickets_sold,
            bookmarks_count,
        }
    }
}

#[derive(FromRow)]
pub struct EventSalesRow {
    pub event_id: EventId,
    pub title: String,
    pub category: String,
    pub ticket_price: i64,
    pub tickets_sold: i64,
}

impl From<EventSalesRow> for EventSales {
    fn from(value: EventSalesRow) -> Self {
        let EventSalesRow {
            event_id,
            title,
            category,
            ticket_price,
            tickets_sold,
        } = value;
        EventSales {
            event_id,
            title,
            category,
            ticket_price,
            tickets_sold,
        }
    }
}
