use anyhow::{Context, Result};
use std::env;

/// Runtime configuration, loaded once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub supabase_url: String,
    pub supabase_key: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub pexels_api_key: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            supabase_url: env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?,
            supabase_key: env::var("SUPABASE_SERVICE_KEY")
                .context("SUPABASE_SERVICE_KEY must be set")?,
            groq_api_key: env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?,
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            pexels_api_key: env::var("PEXELS_API_KEY").context("PEXELS_API_KEY must be set")?,
        })
    }
}
