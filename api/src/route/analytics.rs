use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::analytics::show_analytics_dashboard;

pub fn build_analytics_routers() -> Router<AppRegistry> {
    Router::new().route("/analytics", get(show_analytics_dashboard))
}
