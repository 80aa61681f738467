use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of a shopping list. `recipe_source` names the recipe the item
/// came from, when it was added from a search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_source: Option<String>,
}

/// A named shopping list, stored in the `shopping_lists` table with its
/// items denormalized into a JSON column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub items: Vec<ShoppingListItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/shopping-lists`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewShoppingListRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<ShoppingListItem>,
}

/// Body of `PUT /api/shopping-lists`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShoppingListRequest {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<ShoppingListItem>,
}
