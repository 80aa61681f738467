use crate::{
    error::ApiError,
    models::ShareRecipeRequest,
    services::{AuthClient, SharedRecipesService},
};
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::IdQuery;

#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    pub code: String,
}

/// Public lookup by share code; the only route with no caller identity.
#[get("/shared-recipes")]
pub async fn get_shared_recipe(
    params: web::Query<CodeQuery>,
    shared: web::Data<SharedRecipesService>,
) -> Result<HttpResponse, ApiError> {
    if params.code.trim().is_empty() {
        return Err(ApiError::InvalidInput("code is required".to_string()));
    }

    let recipe = shared.get_by_code(&params.code).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "recipe": recipe
    })))
}

#[post("/shared-recipes")]
pub async fn share_recipe(
    req: HttpRequest,
    body: web::Json<ShareRecipeRequest>,
    auth: web::Data<AuthClient>,
    shared: web::Data<SharedRecipesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let shared_recipe = shared.create(user.id, &body).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "sharedRecipe": shared_recipe
    })))
}

#[delete("/shared-recipes")]
pub async fn delete_shared_recipe(
    req: HttpRequest,
    params: web::Query<IdQuery>,
    auth: web::Data<AuthClient>,
    shared: web::Data<SharedRecipesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    shared.delete(user.id, params.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true
    })))
}
