use crate::error::ApiError;
use crate::models::{CalendarEvent, NewCalendarEventRequest};
use crate::services::supabase::SupabaseClient;
use uuid::Uuid;

const TABLE: &str = "calendar_events";

/// Meal-plan persistence: one row per recipe planned on a date.
#[derive(Debug, Clone)]
pub struct CalendarService {
    supabase: SupabaseClient,
}

impl CalendarService {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<CalendarEvent>, ApiError> {
        self.supabase
            .select_by_user_id(TABLE, user_id, "date.asc", None)
            .await
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: &NewCalendarEventRequest,
    ) -> Result<CalendarEvent, ApiError> {
        let data = serde_json::json!({
            "user_id": user_id,
            "recipe_data": request.recipe_data,
            "date": request.date,
        });

        self.supabase.insert_returning(TABLE, &data).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        self.supabase.delete_scoped(TABLE, id, user_id).await
    }
}
