use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    booking::book_ticket,
    bookmark::toggle_bookmark,
    event::{
        delete_event, register_event, search_events, show_event, show_event_attendees,
        show_event_bookmarks, show_event_list, show_my_listed_events, update_ticket_price,
    },
};

pub fn build_event_routers() -> Router<AppRegistry> {
    let event_routers = Router::new()
        .route("/", get(show_event_list))
        .route("/", post(register_event))
        .route("/search", get(search_events))
        .route("/mine", get(show_my_listed_events))
        .route("/:event_id", get(show_event))
        .route("/:event_id", delete(delete_event))
        .route("/:event_id/ticket-price", put(update_ticket_price))
        .route("/:event_id/bookmark", post(toggle_bookmark))
        .route("/:event_id/attendees", get(show_event_attendees))
        .route("/:event_id/bookmarks", get(show_event_bookmarks))
        .route("/:event_id/bookings", post(book_ticket));

    Router::new().nest("/events", event_routers)
}
