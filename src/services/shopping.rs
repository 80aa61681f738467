use crate::error::ApiError;
use crate::models::{NewShoppingListRequest, ShoppingList, UpdateShoppingListRequest};
use crate::services::supabase::SupabaseClient;
use chrono::Utc;
use uuid::Uuid;

const TABLE: &str = "shopping_lists";
const DEFAULT_LIST_NAME: &str = "Mi Lista";

/// Shopping-list persistence; items live denormalized inside the row.
#[derive(Debug, Clone)]
pub struct ShoppingService {
    supabase: SupabaseClient,
}

impl ShoppingService {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ShoppingList>, ApiError> {
        self.supabase
            .select_by_user_id(TABLE, user_id, "updated_at.desc", None)
            .await
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: &NewShoppingListRequest,
    ) -> Result<ShoppingList, ApiError> {
        let name = request
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_LIST_NAME);
        let data = serde_json::json!({
            "user_id": user_id,
            "name": name,
            "items": request.items,
        });

        self.supabase.insert_returning(TABLE, &data).await
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        request: &UpdateShoppingListRequest,
    ) -> Result<ShoppingList, ApiError> {
        let data = serde_json::json!({
            "name": request.name,
            "items": request.items,
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
