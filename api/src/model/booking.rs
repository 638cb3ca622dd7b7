use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{Attendee, Booking},
    id::{BookingId, EventId},
};
use serde::Serialize;

use super::event::EventSummaryResponse;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub booking_id: BookingId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingGroupsResponse {
    pub items: Vec<BookingGroupResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingGroupResponse {
    pub event_id: EventId,
    pub event_name: String,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub event_image: String,
    pub total_tickets: usize,
    pub active_tickets: usize,
    pub cancelled_tickets: usize,
    pub tickets: Vec<BookingItemResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingItemResponse {
    pub booking_id: BookingId,
    pub is_cancelled: bool,
    pub can_cancel: bool,
    pub booked_at: DateTime<Utc>,
}

impl BookingGroupsResponse {
    /// Groups a user's bookings by event, most recently booked group first.
    pub fn group(bookings: Vec<Booking>, now: DateTime<Utc>) -> Self {
        let mut groups: Vec<BookingGroupResponse> = Vec::new();
        for booking in bookings {
            let item = BookingItemResponse {
                booking_id: booking.booking_id,
                is_cancelled: booking.is_cancelled,
                can_cancel: booking.can_cancel(now),
                booked_at: booking.booked_at,
            };
            match groups
                .iter()
                .position(|g| g.event_id == booking.event.event_id)
            {
                Some(i) => groups[i].tickets.push(item),
                None => groups.push(BookingGroupResponse {
                    event_id: booking.event.event_id,
                    event_name: booking.event.title,
                    starts_at: booking.event.starts_at,
                    location: booking.event.city,
                    event_image: booking.event.image,
                    total_tickets: 0,
                    active_tickets: 0,
                    cancelled_tickets: 0,
                    tickets: vec![item],
                }),
            }
        }

        for group in &mut groups {
            group.total_tickets = group.tickets.len();
            group.active_tickets = group.tickets.iter().filter(|t| !t.is_cancelled).count();
            group.cancelled_tickets = group.tickets.iter().filter(|t| t.is_cancelled).count();
        }

        groups.sort_by_key(|g| std::cmp::Reverse(g.tickets.iter().map(|t| t.booked_at).max()));

        Self { items: groups }
    }
}

/// Single-ticket view: the booking plus its holder's display name.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingTicketResponse {
    pub booking_id: BookingId,
    pub event_name: String,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub holder: String,
}

impl BookingTicketResponse {
    pub fn from_booking(booking: Booking, holder: String) -> Self {
        Self {
            booking_id: booking.booking_id,
            event_name: booking.event.title,
            starts_at: booking.event.starts_at,
            location: booking.event.city,
            holder,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingResponse {
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendeesResponse {
    pub event: EventSummaryResponse,
    pub total_revenue: i64,
    pub items: Vec<AttendeeResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeResponse {
    pub user_name: String,
    pub booked_at: DateTime<Utc>,
    pub is_cancelled: bool,
}

impl From<Attendee> for AttendeeResponse {
    fn from(value: Attendee) -> Self {
        let Attendee {
            user_name,
            booked_at,
            is_cancelled,
        } = value;
        Self {
            user_name,
            booked_at,
            is_cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use kernel::model::{booking::BookingEvent, id::UserId};

    fn booking(
        event_id: EventId,
        title: &str,
        booked_at: DateTime<Utc>,
        starts_at: DateTime<Utc>,
        is_cancelled: bool,
    ) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            booked_by: UserId::new(),
            booked_at,
            is_cancelled,
            cancelled_at: None,
            event: BookingEvent {
                event_id,
                title: title.into(),
                city: "Paris".into(),
                image: "/static/images/default_music.jpg".into(),
                starts_at,
            },
        }
    }

    #[test]
    fn bookings_are_grouped_by_event_with_counts() {
        let now = Utc::now();
        let concert = EventId::new();
        let workshop = EventId::new();
        let starts_at = now + Duration::days(30);

        let grouped = BookingGroupsResponse::group(
            vec![
                booking(concert, "Concert", now - Duration::days(3), starts_at, false),
                booking(concert, "Concert", now - Duration::days(2), starts_at, true),
                booking(workshop, "Workshop", now - Duration::days(1), starts_at, false),
            ],
            now,
        );

        assert_eq!(grouped.items.len(), 2);

        // the workshop booking is the most recent, so its group leads
        assert_eq!(grouped.items[0].event_name, "Workshop");
        assert_eq!(grouped.items[0].total_tickets, 1);

        let concert_group = &grouped.items[1];
        assert_eq!(concert_group.event_name, "Concert");
        assert_eq!(concert_group.total_tickets, 2);
        assert_eq!(concert_group.active_tickets, 1);
        assert_eq!(concert_group.cancelled_tickets, 1);
    }

    #[test]
    fn can_cancel_reflects_the_cutoff_per_booking() {
        let now = Utc::now();
        let soon = EventId::new();
        let later = EventId::new();

        let grouped = BookingGroupsResponse::group(
            vec![
                booking(soon, "Soon", now - Duration::days(1), now + Duration::days(2), false),
                booking(later, "Later", now - Duration::days(2), now + Duration::days(10), false),
            ],
            now,
        );

        let soon_group = grouped
            .items
            .iter()
            .find(|g| g.event_name == "Soon")
            .unwrap();
        let later_group = grouped
            .items
            .iter()
            .find(|g| g.event_name == "Later")
            .unwrap();
        assert!(!soon_group.tickets[0].can_cancel);
        assert!(later_group.tickets[0].can_cancel);
    }

    #[test]
    fn no_bookings_means_no_groups() {
        let grouped = BookingGroupsResponse::group(Vec::new(), Utc::now());
        assert!(grouped.items.is_empty());
    }
}
