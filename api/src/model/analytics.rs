use kernel::model::analytics::{AnalyticsReport, CategoryRevenue, EventTicketStat, RevenueShare};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDashboardResponse {
    pub has_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub report: Option<AnalyticsReportResponse>,
}

impl AnalyticsDashboardResponse {
    pub fn no_data() -> Self {
        Self {
            has_data: false,
            message: Some("No data to display the results".into()),
            report: None,
        }
    }
}

impl From<AnalyticsReport> for AnalyticsDashboardResponse {
    fn from(value: AnalyticsReport) -> Self {
        Self {
            has_data: true,
            message: None,
            report: Some(value.into()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReportResponse {
    pub total_revenue: i64,
    pub total_tickets_sold: i64,
    pub top_5_events: Vec<EventTicketStatResponse>,
    pub top_5_categories: Vec<CategoryRevenueResponse>,
    pub event_revenue_percentage: Vec<RevenueShareResponse>,
}

impl From<AnalyticsReport> for AnalyticsReportResponse {
    fn from(value: AnalyticsReport) -> Self {
        let AnalyticsReport {
            total_revenue,
            total_tickets_sold,
            top_events,
            top_categories,
            revenue_shares,
        } = value;
        Self {
            total_revenue,
            total_tickets_sold,
            top_5_events: top_events.into_iter().map(Into::into).collect(),
            top_5_categories: top_categories.into_iter().map(Into::into).collect(),
            event_revenue_percentage: revenue_shares.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTicketStatResponse {
    pub title: String,
    pub tickets_sold: i64,
    pub revenue: i64,
}

impl From<EventTicketStat> for EventTicketStatResponse {
    fn from(value: EventTicketStat) -> Self {
        let EventTicketStat {
            title,
            tickets_sold,
            revenue,
        } = value;
        Self {
            title,
            tickets_sold,
            revenue,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRevenueResponse {
    pub category: String,
    pub revenue: i64,
}

impl From<CategoryRevenue> for CategoryRevenueResponse {
    fn from(value: CategoryRevenue) -> Self {
        let CategoryRevenue { category, revenue } = value;
        Self { category, revenue }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueShareResponse {
    pub title: String,
    pub revenue: i64,
    pub percentage: f64,
}

impl From<RevenueShare> for RevenueShareResponse {
    fn from(value: RevenueShare) -> Self {
        let RevenueShare {
            title,
            revenue,
            percentage,
        } = value;
        Self {
            title,
            revenue,
            percentage,
        }
    }
}
