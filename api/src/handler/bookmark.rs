use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::{bookmark::event::ToggleBookmark, id::EventId};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::{
        bookmark::ToggleBookmarkResponse,
        event::{EventResponse, EventsResponse},
    },
};

pub async fn toggle_bookmark(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ToggleBookmarkResponse>> {
    registry
        .bookmark_repository()
        .toggle(ToggleBookmark::new(event_id, user.id()))
        .await
        .map(ToggleBookmarkResponse::from)
        .map(Json)
}

pub async fn show_bookmarked_events(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    let events = registry
        .bookmark_repository()
        .find_events_by_user_id(user.id())
        .await?;

    let items = events
        .into_iter()
        .map(|event| EventResponse::from_event(event, true))
        .collect();

    Ok(Json(EventsResponse { items }))
}
