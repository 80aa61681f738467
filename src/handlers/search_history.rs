use crate::{
    error::ApiError,
    models::{RecordSearchRequest, SearchRequest},
    services::{AuthClient, SearchHistoryService},
};
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};

use super::IdQuery;

#[get("/search-history")]
pub async fn get_search_history(
    req: HttpRequest,
    auth: web::Data<AuthClient>,
    history: web::Data<SearchHistoryService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let entries = history.list(user.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "history": entries
    })))
}

/// Explicitly record a search the client already holds results for.
#[post("/search-history")]
pub async fn record_search(
    req: HttpRequest,
    body: web::Json<RecordSearchRequest>,
    auth: web::Data<AuthClient>,
    history: web::Data<SearchHistoryService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let body = body.into_inner();

    let query = SearchRequest {
        ingredients: body.ingredients,
        category: body.category,
        cuisine: body.cuisine,
        diet: body.diet,
        difficulty: body.difficulty,
    };
    let entry = history.record(user.id, &query, &body.recipes).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "history": entry
    })))
}

#[delete("/search-history")]
pub async fn delete_search_history(
    req: HttpRequest,
    params: web::Query<IdQuery>,
    auth: web::Data<AuthClient>,
    history: web::Data<SearchHistoryService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    history.delete(user.id, params.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true
    })))
}
