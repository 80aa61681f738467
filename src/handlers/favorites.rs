use crate::{
    error::ApiError,
    models::NewFavoriteRequest,
    services::{AuthClient, FavoritesService},
};
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};

use super::IdQuery;

#[get("/favorites")]
pub async fn get_favorites(
    req: HttpRequest,
    auth: web::Data<AuthClient>,
    favorites: web::Data<FavoritesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let entries = favorites.list(user.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "favorites": entries
    })))
}

#[post("/favorites")]
pub async fn create_favorite(
    req: HttpRequest,
    body: web::Json<NewFavoriteRequest>,
    auth: web::Data<AuthClient>,
    favorites: web::Data<FavoritesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let favorite = favorites.create(user.id, &body).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "favorite": favorite
    })))
}

#[delete("/favorites")]
pub async fn delete_favorite(
    req: HttpRequest,
    params: web::Query<IdQuery>,
    auth: web::Data<AuthClient>,
    favorites: web::Data<FavoritesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    favorites.delete(user.id, params.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true
    })))
}
