use serde::Deserialize;
use uuid::Uuid;

pub mod calendar;
pub mod favorites;
pub mod health;
pub mod recipe_notes;
pub mod recipes;
pub mod search_history;
pub mod shared_recipes;
pub mod shopping_lists;

pub use calendar::{create_calendar_event, delete_calendar_event, get_calendar_events};
pub use favorites::{create_favorite, delete_favorite, get_favorites};
pub use health::health_check;
pub use recipe_notes::{create_note, delete_note, get_notes, update_note};
pub use recipes::search_recipes;
pub use search_history::{delete_search_history, get_search_history, record_search};
pub use shared_recipes::{delete_shared_recipe, get_shared_recipe, share_recipe};
pub use shopping_lists::{
    create_shopping_list, delete_shopping_list, get_shopping_lists, update_shopping_list,
};

/// `?id=` query parameter shared by the delete routes.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Uuid,
}
