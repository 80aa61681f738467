//! Search history persistence.
//!
//! One row per completed search, holding the query parameters and the full
//! enriched recipe array. Unlike photo resolution, a failed write here is
//! an error the caller gets to see.

use crate::error::ApiError;
use crate::models::{Recipe, SearchHistory, SearchRequest};
use crate::services::supabase::SupabaseClient;
use uuid::Uuid;

const TABLE: &str = "search_history";
const HISTORY_LIMIT: i32 = 20;

#[derive(Debug, Clone)]
pub struct SearchHistoryService {
    supabase: SupabaseClient,
}

impl SearchHistoryService {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    /// Record one completed search with its enriched results.
    pub async fn record(
        &self,
        user_id: Uuid,
        query: &SearchRequest,
        recipes: &[Recipe],
    ) -> Result<SearchHistory, ApiError> {
        let data = serde_json::json!({
            "user_id": user_id,
            "ingredients": query.ingredients,
            "category": query.category,
            "cuisine": query.cuisine,
            "diet": query.diet,
            "difficulty": query.difficulty,
            "recipes_data": recipes,
        });

        self.supabase.insert_returning(TABLE, &data).await
    }

    /// The 20 most recent searches for a user, newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<SearchHistory>, ApiError> {
        self.supabase
            .select_by_user_id(TABLE, user_id, "created_at.desc", Some(HISTORY_LIMIT))
            .await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        self.supabase.delete_scoped(TABLE, id, user_id).await
    }
}
