mod calendar;
mod favorite;
mod note;
mod recipe;
mod search;
mod shared;
mod shopping;

pub use calendar::{CalendarEvent, NewCalendarEventRequest};
pub use favorite::{FavoriteRecipe, NewFavoriteRequest};
pub use note::{NewNoteRequest, RecipeNote, UpdateNoteRequest};
pub use recipe::{parse_amount, Ingredient, Recipe};
pub use search::{RecordSearchRequest, SearchHistory, SearchRequest};
pub use shared::{ShareRecipeRequest, SharedRecipe};
pub use shopping::{
    NewShoppingListRequest, ShoppingList, ShoppingListItem, UpdateShoppingListRequest,
};
