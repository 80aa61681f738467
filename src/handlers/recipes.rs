use crate::{
    error::ApiError,
    models::SearchRequest,
    services::{AuthClient, PhotoResolver, RecipeGenerator, SearchHistoryService},
};
use actix_web::{post, web, HttpRequest, HttpResponse};
use tracing::{info, warn};

/// The search operation: generate candidate recipes, attach photos, record
/// the search. History recording is fire-and-forget relative to the
/// response; its failures are logged, not surfaced.
#[post("/recipes")]
pub async fn search_recipes(
    req: HttpRequest,
    body: web::Json<SearchRequest>,
    auth: web::Data<AuthClient>,
    generator: web::Data<RecipeGenerator>,
    resolver: web::Data<PhotoResolver>,
    history: web::Data<SearchHistoryService>,
) -> Result<HttpResponse, ApiError> {
    let user = auth.user_from_request(&req).await?;
    let query = body.into_inner();

    let recipes = generator.generate(&query).await;
    let recipes = resolver.enrich(&recipes).await;
    info!(user = %user.id, count = recipes.len(), "Search completed");

    if !recipes.is_empty() {
        let history = history.clone();
        let query = query.clone();
        let recipes = recipes.clone();
        let user_id = user.id;
        tokio::spawn(async move {
            if let Err(e) = history.record(user_id, &query, &recipes).await {
                warn!(user = %user_id, "Failed to record search history: {}", e);
            }
        });
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "recipes": recipes
    })))
}
