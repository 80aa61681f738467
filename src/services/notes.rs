use crate::error::ApiError;
use crate::models::{NewNoteRequest, RecipeNote, UpdateNoteRequest};
use crate::services::supabase::SupabaseClient;
use chrono::Utc;
use uuid::Uuid;

const TABLE: &str = "recipe_notes";

/// Notes and ratings a user attaches to recipes.
#[derive(Debug, Clone)]
pub struct NotesService {
    supabase: SupabaseClient,
}

impl NotesService {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    /// All notes for a user, optionally narrowed to one recipe, most
    /// recently updated first.
    pub async fn list(
        &self,
        user_id: Uuid,
        recipe_id: Option<&str>,
    ) -> Result<Vec<RecipeNote>, ApiError> {
        match recipe_id {
            Some(recipe_id) => {
                self.supabase
                    .select_by_user_and(TABLE, user_id, "recipe_id", recipe_id, "updated_at.desc")
                    .await
            }
            None => {
                self.supabase
                    .select_by_user_id(TABLE, user_id, "updated_at.desc", None)
                    .await
            }
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: &NewNoteRequest,
    ) -> Result<RecipeNote, ApiError> {
        let data = serde_json::json!({
            "user_id": user_id,
            "recipe_id": request.recipe_id,
            "notes": request.notes,
            "rating": request.rating,
        });

        self.supabase.insert_returning(TABLE, &data).await
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        request: &UpdateNoteRequest,
    ) -> Result<RecipeNote, ApiError> {
        let data = serde_json::json!({
            "notes": request.notes,
            "rating": request.rating,
            "updated_at": Utc::now().to_rfc3339(),
        });

        self.supabase
            .update_returning(TABLE, request.id, user_id, &data)
            .await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        self.supabase.delete_scoped(TABLE, id, user_id).await
    }
}
