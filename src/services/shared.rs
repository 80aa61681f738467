use crate::error::ApiError;
use crate::models::{ShareRecipeRequest, SharedRecipe};
use crate::services::supabase::SupabaseClient;
use tracing::warn;
use uuid::Uuid;

const TABLE: &str = "shared_recipes";
const SHARE_CODE_LEN: usize = 8;
const MAX_CODE_ATTEMPTS: usize = 5;

/// Public recipe sharing: a short code maps to one published recipe.
#[derive(Debug, Clone)]
pub struct SharedRecipesService {
    supabase: SupabaseClient,
}

impl SharedRecipesService {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    /// Look up a shared recipe by its code and bump the view counter.
    /// The counter bump is best-effort; a read should not fail because the
    /// count could not be written.
    pub async fn get_by_code(&self, code: &str) -> Result<SharedRecipe, ApiError> {
        let shared: SharedRecipe = self
            .supabase
            .select_one_by(TABLE, "share_code", code)
            .await?
            .ok_or_else(|| ApiError::NotFound("Shared recipe not found".to_string()))?;

        let bump = serde_json::json!({ "views": shared.views + 1 });
        if let Err(e) = self.supabase.update_by_id(TABLE, shared.id, &bump).await {
            warn!(code, "Failed to increment share views: {}", e);
        }

        Ok(shared)
    }

    /// Publish a recipe under a fresh share code, retrying a handful of
    /// times on code collisions.
    pub async fn create(
        &self,
        user_id: Uuid,
        request: &ShareRecipeRequest,
    ) -> Result<SharedRecipe, ApiError> {
        let mut share_code = generate_share_code();
        for _ in 0..MAX_CODE_ATTEMPTS {
            let existing: Option<SharedRecipe> = self
                .supabase
                .select_one_by(TABLE, "share_code", &share_code)
                .await?;
            if existing.is_none() {
                break;
            }
            share_code = generate_share_code();
        }

        let data = serde_json::json!({
            "user_id": user_id,
            "recipe_data": request.recipe_data,
            "share_code": share_code,
        });

        self.supabase.insert_returning(TABLE, &data).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        self.supabase.delete_scoped(TABLE, id, user_id).await
    }
}

/// An 8-character lowercase code, random enough for shareable URLs.
fn generate_share_code() -> String {
    Uuid::new_v4().simple().to_string()[..SHARE_CODE_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_codes_are_short_and_url_safe() {
        let code = generate_share_code();
        assert_eq!(code.len(), SHARE_CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn share_codes_vary() {
        assert_ne!(generate_share_code(), generate_share_code());
    }
}
