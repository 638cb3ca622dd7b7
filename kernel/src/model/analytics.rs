use crate::model::id::EventId;

/// How many entries the ranked dashboard lists keep.
pub const TOP_N: usize = 5;

/// Per-event sales figures for one organizer, in the organizer's original
/// event order. Cancelled bookings count towards `tickets_sold`.
#[derive(Debug, Clone)]
pub struct EventSales {
    pub event_id: EventId,
    pub title: String,
    pub category: String,
    pub ticket_price: i64,
    pub tickets_sold: i64,
}

impl EventSales {
    pub fn revenue(&self) -> i64 {
        self.tickets_sold * self.ticket_price
    }
}

#[derive(Debug, PartialEq)]
pub struct EventTicketStat {
    pub title: String,
    pub tickets_sold: i64,
    pub revenue: i64,
}

#[derive(Debug, PartialEq)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: i64,
}

#[derive(Debug, PartialEq)]
pub struct RevenueShare {
    pub title: String,
    pub revenue: i64,
    /// Share of total revenue, rounded to two decimal places.
    pub percentage: f64,
}

#[derive(Debug)]
pub struct AnalyticsReport {
    pub total_revenue: i64,
    pub total_tickets_sold: i64,
    pub top_events: Vec<EventTicketStat>,
    pub top_categories: Vec<CategoryRevenue>,
    /// Empty when total revenue is zero; events with zero revenue are
    /// excluded.
    pub revenue_shares: Vec<RevenueShare>,
}

impl AnalyticsReport {
    /// Rolls up an organizer's per-event sales. Ranked lists break ties by
    /// the incoming event order. Returns `None` when the organizer owns no
    /// events.
    pub fn from_sales(sales: &[EventSales]) -> Option<Self> {
        if sales.is_empty() {
            return None;
        }

        let total_tickets_sold = sales.iter().map(|s| s.tickets_sold).sum();
        let total_revenue: i64 = sales.iter().map(|s| s.revenue()).sum();

        let mut top_events: Vec<EventTicketStat> = sales
            .iter()
            .map(|s| EventTicketStat {
                title: s.title.clone(),
                tickets_sold: s.tickets_sold,
                revenue: s.revenue(),
            })
            .collect();
        // sort_by is stable, so ties keep the original event order
        top_events.sort_by(|a, b| b.tickets_sold.cmp(&a.tickets_sold));
        top_events.truncate(TOP_N);

        let mut top_categories: Vec<CategoryRevenue> = Vec::new();
        for sale in sales {
            match top_categories
                .iter()
                .position(|c| c.category == sale.category)
            {
                Some(i) => top_categories[i].revenue += sale.revenue(),
                None => top_categories.push(CategoryRevenue {
                    category: sale.category.clone(),
                    revenue: sale.revenue(),
                }),
            }
        }
        top_categories.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        top_categories.truncate(TOP_N);

        let revenue_shares = if total_revenue > 0 {
            sales
                .iter()
                .filter(|s| s.revenue() > 0)
                .map(|s| RevenueShare {
                    title: s.title.clone(),
                    revenue: s.revenue(),
                    percentage: round2(s.revenue() as f64 / total_revenue as f64 * 100.0),
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(Self {
            total_revenue,
            total_tickets_sold,
            top_events,
            top_categories,
            revenue_shares,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales(title: &str, category: &str, ticket_price: i64, tickets_sold: i64) -> EventSales {
        EventSales {
            event_id: EventId::new(),
            title: title.into(),
            category: category.into(),
            ticket_price,
            tickets_sold,
        }
    }

    #[test]
    fn no_events_means_no_data() {
        assert!(AnalyticsReport::from_sales(&[]).is_none());
    }

    #[test]
    fn totals_for_two_events_with_one_booking_each() {
        let report = AnalyticsReport::from_sales(&[
            sales("Concert", "Music", 50, 1),
            sales("Conference", "Conference", 100, 1),
        ])
        .unwrap();

        assert_eq!(report.total_revenue, 150);
        assert_eq!(report.total_tickets_sold, 2);
    }

    #[test]
    fn per_event_revenue_sums_to_total() {
        let input = [
            sales("A", "Music", 50, 3),
            sales("B", "Sport", 20, 0),
            sales("C", "Music", 75, 4),
        ];
        let report = AnalyticsReport::from_sales(&input).unwrap();

        let summed: i64 = input.iter().map(EventSales::revenue).sum();
        assert_eq!(report.total_revenue, summed);
        for stat in &report.top_events {
            let source = input.iter().find(|s| s.title == stat.title).unwrap();
            assert_eq!(stat.revenue, source.tickets_sold * source.ticket_price);
        }
    }

    #[test]
    fn top_events_are_ranked_and_truncated_to_five() {
        let input: Vec<EventSales> = (0..7)
            .map(|i| sales(&format!("event-{i}"), "Music", 10, i))
            .collect();
        let report = AnalyticsReport::from_sales(&input).unwrap();

        assert_eq!(report.top_events.len(), TOP_N);
        assert_eq!(report.top_events[0].title, "event-6");
        assert_eq!(report.top_events[4].title, "event-2");
    }

    #[test]
    fn tied_events_keep_their_original_order() {
        let report = AnalyticsReport::from_sales(&[
            sales("first", "Music", 10, 2),
            sales("second", "Music", 99, 2),
            sales("third", "Music", 10, 5),
        ])
        .unwrap();

        let titles: Vec<&str> = report.top_events.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["third", "first", "second"]);
    }

    #[test]
    fn category_revenue_is_summed_and_ranked() {
        let report = AnalyticsReport::from_sales(&[
            sales("A", "Music", 50, 1),
            sales("B", "Sport", 200, 1),
            sales("C", "Music", 100, 1),
        ])
        .unwrap();

        assert_eq!(
            report.top_categories,
            [
                CategoryRevenue {
                    category: "Sport".into(),
                    revenue: 200
                },
                CategoryRevenue {
                    category: "Music".into(),
                    revenue: 150
                },
            ]
        );
    }

    #[test]
    fn tied_categories_keep_first_seen_order() {
        let report = AnalyticsReport::from_sales(&[
            sales("A", "Theatre", 100, 1),
            sales("B", "Workshop", 100, 1),
        ])
        .unwrap();

        let categories: Vec<&str> = report
            .top_categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, ["Theatre", "Workshop"]);
    }

    #[test]
    fn revenue_shares_are_percentages_rounded_to_two_decimals() {
        let report = AnalyticsReport::from_sales(&[
            sales("A", "Music", 1, 1),
            sales("B", "Music", 1, 2),
        ])
        .unwrap();

        assert_eq!(report.revenue_shares.len(), 2);
        assert_eq!(report.revenue_shares[0].percentage, 33.33);
        assert_eq!(report.revenue_shares[1].percentage, 66.67);
    }

    #[test]
    fn zero_revenue_events_are_excluded_from_shares() {
        let report = AnalyticsReport::from_sales(&[
            sales("sold", "Music", 50, 2),
            sales("unsold", "Music", 50, 0),
        ])
        .unwrap();

        assert_eq!(report.revenue_shares.len(), 1);
        assert_eq!(report.revenue_shares[0].title, "sold");
        assert_eq!(report.revenue_shares[0].percentage, 100.0);
    }

    #[test]
    fn shares_are_omitted_entirely_when_total_revenue_is_zero() {
        let report = AnalyticsReport::from_sales(&[
            sales("A", "Music", 0, 10),
            sales("B", "Music", 50, 0),
        ])
        .unwrap();

        assert_eq!(report.total_revenue, 0);
        assert_eq!(report.total_tickets_sold, 10);
        assert!(report.revenue_shares.is_empty());
    }

    #[test]
    fn cancelled_bookings_still_count_in_the_input_contract() {
        // tickets_sold arrives pre-counted with cancelled bookings included;
        // the rollup must not second-guess it
        let report = AnalyticsReport::from_sales(&[sales("A", "Music", 50, 4)]).unwrap();
        assert_eq!(report.total_tickets_sold, 4);
        assert_eq!(report.total_revenue, 200);
    }
}
