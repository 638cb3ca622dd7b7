use axum::{extract::State, Json};
use kernel::model::analytics::AnalyticsReport;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{extractor::AuthorizedUser, model::analytics::AnalyticsDashboardResponse};

pub async fn show_analytics_dashboard(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AnalyticsDashboardResponse>> {
    let sales = registry
        .event_repository()
        .find_sales_by_owner(user.id())
        .await?;

    let response = match AnalyticsReport::from_sales(&sales) {
        Some(report) => AnalyticsDashboardResponse::from(report),
        None => AnalyticsDashboardResponse::no_data(),
    };

    Ok(Json(response))
}
