use crate::{
    config::Config,
    error::Result,
    routes::api_routes,
    services::{
        AuthClient, CalendarService, FavoritesService, GroqClient, NotesService, PexelsClient,
        PhotoResolver, RecipeGenerator, SearchHistoryService, SharedRecipesService,
        ShoppingService, SupabaseClient,
    },
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        // Always bind to 0.0.0.0 for Docker compatibility
        let bind_address = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        // External clients, constructed once and shared by handle
        let supabase =
            SupabaseClient::new(&self.config.supabase_url, &self.config.supabase_key);
        let auth = web::Data::new(AuthClient::new(
            &self.config.supabase_url,
            &self.config.supabase_key,
        ));

        let generator = web::Data::new(RecipeGenerator::new(Arc::new(GroqClient::new(
            self.config.groq_api_key.clone(),
            self.config.groq_model.clone(),
        ))));
        let resolver = web::Data::new(PhotoResolver::new(Arc::new(PexelsClient::new(
            self.config.pexels_api_key.clone(),
        ))));

        let search_history = web::Data::new(SearchHistoryService::new(supabase.clone()));
        let favorites = web::Data::new(FavoritesService::new(supabase.clone()));
        let calendar = web::Data::new(CalendarService::new(supabase.clone()));
        let notes = web::Data::new(NotesService::new(supabase.clone()));
        let shopping = web::Data::new(ShoppingService::new(supabase.clone()));
        let shared = web::Data::new(SharedRecipesService::new(supabase));

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(auth.clone())
                .app_data(generator.clone())
                .app_data(resolver.clone())
                .app_data(search_history.clone())
                .app_data(favorites.clone())
                .app_data(calendar.clone())
                .app_data(notes.clone())
                .app_data(shopping.clone())
                .app_data(shared.clone())
                .service(api_routes())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
