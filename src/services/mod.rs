pub mod auth;
pub mod calendar;
pub mod completion;
pub mod favorites;
pub mod generator;
pub mod image_search;
pub mod notes;
pub mod photos;
pub mod search_history;
pub mod shared;
pub mod shopping;
pub mod supabase;

// Re-export public types
pub use auth::{AuthClient, AuthUser};
pub use calendar::CalendarService;
pub use completion::{CompletionProvider, FakeCompletion, GroqClient};
pub use favorites::FavoritesService;
pub use generator::RecipeGenerator;
pub use image_search::{FakeImageSearch, ImageSearchProvider, PexelsClient};
pub use notes::NotesService;
pub use photos::{PhotoResolver, ResolvedPhoto};
pub use search_history::SearchHistoryService;
pub use shared::SharedRecipesService;
pub use shopping::ShoppingService;
pub use supabase::SupabaseClient;
