use crate::models::Recipe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe published under a short share code, stored in the
/// `shared_recipes` table. Anyone holding the code can read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_data: Recipe,
    pub share_code: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/shared-recipes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecipeRequest {
    pub recipe_data: Recipe,
}
