use crate::models::Recipe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/recipes`, the search operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// One completed search and its enriched result set, as stored in the
/// `search_history` table. Never mutated; deleted explicitly by the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredients: Vec<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub recipes_data: Vec<Recipe>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/search-history`: explicit record of a search the
/// client already holds the results for.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSearchRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub recipes: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_defaults_missing_fields() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"ingredients": ["huevo", "espinaca"]}"#).unwrap();
        assert_eq!(request.ingredients.len(), 2);
        assert!(request.category.is_none());
        assert!(request.diet.is_none());
    }

    #[test]
    fn search_history_row_deserializes() {
        let json = r#"{
            "id": "7b6f3f3e-5df0-4cf8-93a8-09f3a3f2a111",
            "user_id": "b4f1c9a1-90fb-44f0-8f6c-2d9b5f8e2c22",
            "ingredients": ["huevo"],
            "category": "desayuno",
            "cuisine": null,
            "recipes_data": [],
            "diet": null,
            "difficulty": null,
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let row: SearchHistory = serde_json::from_str(json).unwrap();
        assert_eq!(row.category.as_deref(), Some("desayuno"));
        assert!(row.recipes_data.is_empty());
    }
}
