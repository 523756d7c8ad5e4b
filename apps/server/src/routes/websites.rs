use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use uptime::{NewWebsite, WebsiteUpdate};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

macros_utils::routes! {
    route list_websites,
    route create_website,
    route get_website,
    route update_website,
    route delete_website,
    route website_checks,
    route website_stats,
}

#[derive(Debug, Deserialize)]
pub struct ChecksQuery {
    /// Most recent N checks; all retained checks when absent
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
}

#[get("/websites")]
pub async fn list_websites(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.list_websites().await)
}

#[post("/websites")]
pub async fn create_website(
    state: web::Data<AppState>,
    body: web::Json<NewWebsite>,
) -> Result<HttpResponse, ApiError> {
    let website = state.store.add_website(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(website))
}

#[get("/websites/{id}")]
pub async fn get_website(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let website = state
        .store
        .get_website(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Website {id} not found")))?;
    Ok(HttpResponse::Ok().json(website))
}

#[patch("/websites/{id}")]
pub async fn update_website(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<WebsiteUpdate>,
) -> Result<HttpResponse, ApiError> {
    let website = state.store.update_website(id.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(website))
}

#[delete("/websites/{id}")]
pub async fn delete_website(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state.store.delete_website(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Deleted { success: true }))
}

#[get("/websites/{id}/checks")]
pub async fn website_checks(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    query: web::Query<ChecksQuery>,
) -> Result<HttpResponse, ApiError> {
    let checks = state.store.checks(id.into_inner(), query.limit).await?;
    Ok(HttpResponse::Ok().json(checks))
}

#[get("/websites/{id}/stats")]
pub async fn website_stats(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let stats = state.store.website_stats(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
