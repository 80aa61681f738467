use crate::{
    error::ApiError,
    models::{NewShoppingListRequest, UpdateShoppingListRequest},
    services::{AuthClient, ShoppingService},
};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};

use super::IdQuery;

#[get("/shopping-lists")]
pub async fn get_shopping_lists(
    req: HttpRequest,
    auth: web::Data<AuthClient>,
    shopping: web::Data<ShoppingService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let lists = shopping.list(user.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "lists": lists
    })))
}

#[post("/shopping-lists")]
pub async fn create_shopping_list(
    req: HttpRequest,
    body: web::Json<NewShoppingListRequest>,
    auth: web::Data<AuthClient>,
    shopping: web::Data<ShoppingService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let list = shopping.create(user.id, &body).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "list": list
    })))
}

#[put("/shopping-lists")]
pub async fn update_shopping_list(
    req: HttpRequest,
    body: web::Json<UpdateShoppingListRequest>,
    auth: web::Data<AuthClient>,
    shopping: web::Data<ShoppingService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let list = shopping.update(user.id, &body).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "list": list
    })))
}

#[delete("/shopping-lists")]
pub async fn delete_shopping_list(
    req: HttpRequest,
    params: web::Query<IdQuery>,
    auth: web::Data<AuthClient>,
    shopping: web::Data<ShoppingService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    shopping.delete(user.id, params.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true
    })))
}
