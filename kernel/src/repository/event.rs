use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    analytics::EventSales,
    event::{
        event::{CreateEvent, DeleteEvent, SearchEvents, UpdateTicketPrice},
        Event, OwnedEventStats,
    },
    id::{EventId, UserId},
};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    // Public listing, newest first.
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    // Owner-gated lookup; non-owners see the same `None` as a missing event.
    async fn find_owned_by_id(&self, event_id: EventId, owner_id: UserId)
        -> AppResult<Option<Event>>;
    async fn search(&self, filter: SearchEvents) -> AppResult<Vec<Event>>;
    // An organizer's own events, newest first, with sales counters.
    async fn find_owned_with_stats(&self, owner_id: UserId) -> AppResult<Vec<OwnedEventStats>>;
    // Analytics input, in the organizer's original event order.
    async fn find_sales_by_owner(&self, owner_id: UserId) -> AppResult<Vec<EventSales>>;
    async fn update_ticket_price(&self, event: UpdateTicketPrice) -> AppResult<()>;
    // Refuses while rows exist in the tickets table for the event.
    async fn delete(&self, event: DeleteEvent) -> AppResult<()>;
}
