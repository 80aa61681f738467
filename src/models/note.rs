use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-text notes and an optional 1-5 rating a user attached to a recipe,
/// stored in the `recipe_notes` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeNote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: String,
    pub notes: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/recipe-notes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNoteRequest {
    pub recipe_id: String,
    pub notes: String,
    #[serde(default)]
    pub rating: Option<i32>,
}

/// Body of `PUT /api/recipe-notes`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: Uuid,
    pub notes: String,
    #[serde(default)]
    pub rating: Option<i32>,
}
