use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, SearchEvents, SearchField},
        Event, OwnedEventStats,
    },
    id::{EventId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(skip)]
    pub pincode: i32,
    #[garde(length(min = 1))]
    pub category: String,
    #[garde(skip)]
    pub description: String,
    #[garde(range(min = 0))]
    pub ticket_price: i64,
    #[garde(skip)]
    pub starts_at: DateTime<Utc>,
    #[garde(skip)]
    pub ends_at: DateTime<Utc>,
    /// Base64-encoded image payload, pushed to the image host.
    #[garde(skip)]
    pub image: Option<String>,
}

impl CreateEventRequest {
    /// `image` here is the resolved public URL, not the uploaded payload.
    pub fn into_create_event(self, image: String, owned_by: UserId) -> CreateEvent {
        let CreateEventRequest {
            title,
            city,
            address,
            pincode,
            category,
            description,
            ticket_price,
            starts_at,
            ends_at,
            image: _,
        } = self;
        CreateEvent {
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
            owned_by,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedResponse {
    pub event_id: EventId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub items: Vec<EventResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
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
    pub organizer: String,
    pub bookmarked: bool,
}

impl EventResponse {
    pub fn from_event(event: Event, bookmarked: bool) -> Self {
        let Event {
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
            created_at: _,
            owner,
        } = event;
        Self {
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
            organizer: owner.owner_name,
            bookmarked,
        }
    }
}

/// Compact event shape embedded in owner-only detail views.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryResponse {
    pub event_id: EventId,
    pub title: String,
    pub city: String,
    pub image: String,
    pub starts_at: DateTime<Utc>,
    pub ticket_price: i64,
}

impl From<Event> for EventSummaryResponse {
    fn from(value: Event) -> Self {
        Self {
            event_id: value.event_id,
            title: value.title,
            city: value.city,
            image: value.image,
            starts_at: value.starts_at,
            ticket_price: value.ticket_price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchEventsQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "search-type")]
    pub search_type: Option<String>,
}

impl SearchEventsQuery {
    /// Whether there is anything to search for. A present-but-malformed
    /// date still counts: the caller gets a warning, not a redirect.
    pub fn has_criteria(&self) -> bool {
        let has_text = self
            .query
            .as_deref()
            .is_some_and(|q| !q.trim().is_empty());
        let has_date = self
            .date
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty());
        has_text || has_date
    }

    /// Builds the repository filter. A malformed date yields a warning and
    /// the search proceeds on the text filter alone.
    pub fn into_filter(self) -> (SearchEvents, Option<String>) {
        let text = self
            .query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        let field = SearchField::from_selector(self.search_type.as_deref());

        let mut warning = None;
        let starts_within = match self.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            None => None,
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(day) => {
                    let from = day.and_time(NaiveTime::MIN).and_utc();
                    Some((from, from + Duration::days(1)))
                }
                Err(_) => {
                    warning = Some("Invalid date format.".to_string());
                    None
                }
            },
        };

        (
            SearchEvents {
                text,
                field,
                starts_within,
            },
            warning,
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEventsResponse {
    pub items: Vec<EventResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedEventsResponse {
    pub items: Vec<OwnedEventResponse>,
}

impl From<Vec<OwnedEventStats>> for OwnedEventsResponse {
    fn from(value: Vec<OwnedEventStats>) -> Self {
        Self {
            items: value.into_iter().map(OwnedEventResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedEventResponse {
    pub event_id: EventId,
    pub title: String,
    pub city: String,
    pub category: String,
    pub image: String,
    pub starts_at: DateTime<Utc>,
    pub ticket_price: i64,
    pub tickets_sold: i64,
    pub bookmarks_count: i64,
    pub revenue: i64,
}

impl From<OwnedEventStats> for OwnedEventResponse {
    fn from(value: OwnedEventStats) -> Self {
        let revenue = value.revenue();
        let OwnedEventStats {
            event,
            tickets_sold,
            bookmarks_count,
        } = value;
        Self {
            event_id: event.event_id,
            title: event.title,
            city: event.city,
            category: event.category,
            image: event.image,
            starts_at: event.starts_at,
            ticket_price: event.ticket_price,
            tickets_sold,
            bookmarks_count,
            revenue,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketPriceRequest {
    pub ticket_price: String,
}

impl UpdateTicketPriceRequest {
    /// The raw value must parse as a non-negative integer.
    pub fn parse_price(&self) -> Option<i64> {
        self.ticket_price
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|price| *price >= 0)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketPriceResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateTicketPriceResponse {
    pub fn updated(new_price: i64) -> Self {
        Self {
            success: true,
            new_price: Some(new_price),
            error: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            success: false,
            new_price: None,
            error: Some("Invalid price".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query(
        query: Option<&str>,
        date: Option<&str>,
        search_type: Option<&str>,
    ) -> SearchEventsQuery {
        SearchEventsQuery {
            query: query.map(Into::into),
            date: date.map(Into::into),
            search_type: search_type.map(Into::into),
        }
    }

    #[test]
    fn no_query_and_no_date_means_no_criteria() {
        assert!(!query(None, None, None).has_criteria());
        assert!(!query(Some("   "), Some(""), None).has_criteria());
    }

    #[test]
    fn either_text_or_date_counts_as_criteria() {
        assert!(query(Some("jazz"), None, None).has_criteria());
        assert!(query(None, Some("2026-09-01"), None).has_criteria());
        assert!(query(None, Some("not-a-date"), None).has_criteria());
    }

    #[test]
    fn valid_date_becomes_a_single_day_range() {
        let (filter, warning) = query(Some("jazz"), Some("2026-09-01"), Some("name")).into_filter();

        assert!(warning.is_none());
        assert_eq!(filter.text.as_deref(), Some("jazz"));
        assert_eq!(filter.field, SearchField::Title);

        let (from, until) = filter.starts_within.unwrap();
        assert_eq!(from, Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
        assert_eq!(until, Utc.with_ymd_and_hms(2026, 9, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn malformed_date_warns_and_keeps_the_text_filter() {
        let (filter, warning) = query(Some("jazz"), Some("01/09/2026"), None).into_filter();

        assert_eq!(warning.as_deref(), Some("Invalid date format."));
        assert_eq!(filter.text.as_deref(), Some("jazz"));
        assert!(filter.starts_within.is_none());
    }

    #[test]
    fn query_text_is_trimmed() {
        let (filter, _) = query(Some("  jazz  "), None, None).into_filter();
        assert_eq!(filter.text.as_deref(), Some("jazz"));
    }

    #[test]
    fn price_must_parse_as_a_non_negative_integer() {
        let parse = |raw: &str| {
            UpdateTicketPriceRequest {
                ticket_price: raw.into(),
            }
            .parse_price()
        };
        assert_eq!(parse("250"), Some(250));
        assert_eq!(parse(" 0 "), Some(0));
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("12.5"), None);
        assert_eq!(parse("-3"), None);
        assert_eq!(parse(""), None);
    }
}
