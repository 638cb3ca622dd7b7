use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::bookmark::show_bookmarked_events;

pub fn build_bookmark_routers() -> Router<AppRegistry> {
    Router::new().route("/bookmarks", get(show_bookmarked_events))
}
