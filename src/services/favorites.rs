use crate::error::ApiError;
use crate::models::{FavoriteRecipe, NewFavoriteRequest};
use crate::services::supabase::SupabaseClient;
use uuid::Uuid;

const TABLE: &str = "favorites";

/// Saved-recipe persistence, one row per favorite.
#[derive(Debug, Clone)]
pub struct FavoritesService {
    supabase: SupabaseClient,
}

impl FavoritesService {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<FavoriteRecipe>, ApiError> {
        self.supabase
            .select_by_user_id(TABLE, user_id, "created_at.desc", None)
            .await
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: &NewFavoriteRequest,
    ) -> Result<FavoriteRecipe, ApiError> {
        let data = serde_json::json!({
            "user_id": user_id,
            "recipe_name": request.recipe_name,
            "recipe_data": request.recipe_data,
        });

        self.supabase.insert_returning(TABLE, &data).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        self.supabase.delete_scoped(TABLE, id, user_id).await
    }
}
