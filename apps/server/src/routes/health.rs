use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::state::AppState;

macros_utils::routes! {
    route health_route,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    websites: usize,
}

/// Liveness probe for the monitor itself
#[get("/health")]
pub async fn health_route(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        websites: state.store.list_websites().await.len(),
    })
}
