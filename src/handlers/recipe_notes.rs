use crate::{
    error::ApiError,
    models::{NewNoteRequest, UpdateNoteRequest},
    services::{AuthClient, NotesService},
};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::IdQuery;

#[derive(Debug, Deserialize)]
pub struct NotesQuery {
    #[serde(rename = "recipeId")]
    pub recipe_id: Option<String>,
}

#[get("/recipe-notes")]
pub async fn get_notes(
    req: HttpRequest,
    params: web::Query<NotesQuery>,
    auth: web::Data<AuthClient>,
    notes: web::Data<NotesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let entries = notes.list(user.id, params.recipe_id.as_deref()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "notes": entries
    })))
}

#[post("/recipe-notes")]
pub async fn create_note(
    req: HttpRequest,
    body: web::Json<NewNoteRequest>,
    auth: web::Data<AuthClient>,
    notes: web::Data<NotesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;

    if body.recipe_id.trim().is_empty() || body.notes.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "recipeId and notes are required".to_string(),
        ));
    }

    let note = notes.create(user.id, &body).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "note": note
    })))
}

#[put("/recipe-notes")]
pub async fn update_note(
    req: HttpRequest,
    body: web::Json<UpdateNoteRequest>,
    auth: web::Data<AuthClient>,
    notes: web::Data<NotesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let note = notes.update(user.id, &body).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "note": note
    })))
}

#[delete("/recipe-notes")]
pub async fn delete_note(
    req: HttpRequest,
    params: web::Query<IdQuery>,
    auth: web::Data<AuthClient>,
    notes: web::Data<NotesService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    notes.delete(user.id, params.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true
    })))
}
