use std::collections::HashSet;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use garde::Validate;
use kernel::model::{
    event::{
        default_image_for,
        event::{DeleteEvent, UpdateTicketPrice},
    },
    id::EventId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        booking::{AttendeeResponse, EventAttendeesResponse},
        bookmark::{EventBookmarkResponse, EventBookmarksResponse},
        event::{
            CreateEventRequest, EventCreatedResponse, EventResponse, EventsResponse,
            OwnedEventsResponse, SearchEventsQuery, SearchEventsResponse,
            UpdateTicketPriceRequest, UpdateTicketPriceResponse,
        },
    },
};

pub async fn register_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventCreatedResponse>)> {
    req.validate(&())?;

    let image = match req.image.as_deref() {
        Some(payload) => match registry.image_host_client().upload(payload).await {
            Ok(url) => url,
            Err(e) => {
                // a broken upload never blocks event creation
                tracing::warn!(
                    error.message = %e,
                    "image upload failed, falling back to the category default"
                );
                default_image_for(&req.category).to_string()
            }
        },
        None => default_image_for(&req.category).to_string(),
    };

    let event_id = registry
        .event_repository()
        .create(req.into_create_event(image, user.id()))
        .await?;

    Ok((StatusCode::CREATED, Json(EventCreatedResponse { event_id })))
}

pub async fn show_event_list(
    user: Option<AuthorizedUser>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    let events = registry.event_repository().find_all().await?;

    let bookmarked: HashSet<EventId> = match &user {
        Some(user) => registry
            .bookmark_repository()
            .find_event_ids_by_user_id(user.id())
            .await?
            .into_iter()
            .collect(),
        None => HashSet::new(),
    };

    let items = events
        .into_iter()
        .map(|event| {
            let is_bookmarked = bookmarked.contains(&event.event_id);
            EventResponse::from_event(event, is_bookmarked)
        })
        .collect();

    Ok(Json(EventsResponse { items }))
}

pub async fn show_event(
    user: Option<AuthorizedUser>,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    let event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("event not found".into()))?;

    let bookmarked = match &user {
        Some(user) => {
            registry
                .bookmark_repository()
                .exists(user.id(), event_id)
                .await?
        }
        None => false,
    };

    Ok(Json(EventResponse::from_event(event, bookmarked)))
}

pub async fn search_events(
    Query(query): Query<SearchEventsQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    if !query.has_criteria() {
        // nothing to search for; send the caller back to the listing
        return Ok(Redirect::to("/events").into_response());
    }

    let (filter, warning) = query.into_filter();
    let events = registry.event_repository().search(filter).await?;
    let items = events
        .into_iter()
        .map(|event| EventResponse::from_event(event, false))
        .collect();

    Ok(Json(SearchEventsResponse { items, warning }).into_response())
}

pub async fn show_my_listed_events(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OwnedEventsResponse>> {
    registry
        .event_repository()
        .find_owned_with_stats(user.id())
        .await
        .map(OwnedEventsResponse::from)
        .map(Json)
}

pub async fn update_ticket_price(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateTicketPriceRequest>,
) -> AppResult<Json<UpdateTicketPriceResponse>> {
    let Some(new_price) = req.parse_price() else {
        return Ok(Json(UpdateTicketPriceResponse::invalid()));
    };

    registry
        .event_repository()
        .update_ticket_price(UpdateTicketPrice {
            event_id,
            requested_user: user.id(),
            ticket_price: new_price,
        })
        .await?;

    Ok(Json(UpdateTicketPriceResponse::updated(new_price)))
}

pub async fn delete_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .event_repository()
        .delete(DeleteEvent {
            event_id,
            requested_user: user.id(),
        })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_event_attendees(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventAttendeesResponse>> {
    // non-owners get the same not-found as a missing event
    let event = registry
        .event_repository()
        .find_owned_by_id(event_id, user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("event not found".into()))?;

    let attendees = registry
        .booking_repository()
        .find_attendees_by_event_id(event_id)
        .await?;

    let total_revenue = attendees.len() as i64 * event.ticket_price;

    Ok(Json(EventAttendeesResponse {
        event: event.into(),
        total_revenue,
        items: attendees.into_iter().map(AttendeeResponse::from).collect(),
    }))
}

pub async fn show_event_bookmarks(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventBookmarksResponse>> {
    // non-owners get the same not-found as a missing event
    let event = registry
        .event_repository()
        .find_owned_by_id(event_id, user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("event not found".into()))?;

    let bookmarks = registry
        .bookmark_repository()
        .find_by_event_id(event_id)
        .await?;

    Ok(Json(EventBookmarksResponse {
        event: event.into(),
        items: bookmarks
            .into_iter()
            .map(EventBookmarkResponse::from)
            .collect(),
    }))
}
