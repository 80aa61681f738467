use actix_web::{web, Scope};

use crate::handlers::{
    create_calendar_event, create_favorite, create_note, create_shopping_list,
    delete_calendar_event, delete_favorite, delete_note, delete_search_history,
    delete_shared_recipe, delete_shopping_list, get_calendar_events, get_favorites, get_notes,
    get_search_history, get_shared_recipe, get_shopping_lists, health_check, record_search,
    search_recipes, share_recipe, update_note, update_shopping_list,
};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(search_recipes)
        .service(get_search_history)
        .service(record_search)
        .service(delete_search_history)
        .service(get_favorites)
        .service(create_favorite)
        .service(delete_favorite)
        .service(get_calendar_events)
        .service(create_calendar_event)
        .service(delete_calendar_event)
        .service(get_notes)
        .service(create_note)
        .service(update_note)
        .service(delete_note)
        .service(get_shopping_lists)
        .service(create_shopping_list)
        .service(update_shopping_list)
        .service(delete_shopping_list)
        .service(get_shared_recipe)
        .service(share_recipe)
        .service(delete_shared_recipe)
}
