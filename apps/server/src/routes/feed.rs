//! Combined feed across every website, as rendered by the dashboard.

use actix_web::{HttpResponse, Responder, get, web};
use uptime::monitoring::stats;

use crate::state::AppState;

macros_utils::routes! {
    route uptime_feed,
    route feed_stats,
}

/// Most recent checks across all websites, oldest first
#[get("/uptime")]
pub async fn uptime_feed(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.feed(state.feed_limit).await)
}

/// Statistics over the same window the feed shows
#[get("/stats")]
pub async fn feed_stats(state: web::Data<AppState>) -> impl Responder {
    let checks = state.store.combined_checks(state.feed_limit).await;
    HttpResponse::Ok().json(stats(&checks))
}
