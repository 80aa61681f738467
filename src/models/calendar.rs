use crate::models::Recipe;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe planned for a day, stored in the `calendar_events` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_data: Recipe,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/calendar`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalendarEventRequest {
    pub recipe_data: Recipe,
    pub date: NaiveDate,
}
