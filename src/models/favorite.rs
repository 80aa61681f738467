use crate::models::Recipe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe saved by a user, stored in the `favorites` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_name: String,
    pub recipe_data: Recipe,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/favorites`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavoriteRequest {
    pub recipe_name: String,
    pub recipe_data: Recipe,
}
