use crate::{
    error::ApiError,
    models::NewCalendarEventRequest,
    services::{AuthClient, CalendarService},
};
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};

use super::IdQuery;

#[get("/calendar")]
pub async fn get_calendar_events(
    req: HttpRequest,
    auth: web::Data<AuthClient>,
    calendar: web::Data<CalendarService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let events = calendar.list(user.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "events": events
    })))
}

#[post("/calendar")]
pub async fn create_calendar_event(
    req: HttpRequest,
    body: web::Json<NewCalendarEventRequest>,
    auth: web::Data<AuthClient>,
    calendar: web::Data<CalendarService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let event = calendar.create(user.id, &body).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "event": event
    })))
}

#[delete("/calendar")]
pub async fn delete_calendar_event(
    req: HttpRequest,
    params: web::Query<IdQuery>,
    auth: web::Data<AuthClient>,
    calendar: web::Data<CalendarService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    calendar.delete(user.id, params.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true
    })))
}
