//! Caller identity, delegated to the hosted auth provider.
//!
//! Every protected route carries the user's access token in the
//! `Authorization` header; one GoTrue call resolves it to a user id. No
//! sessions are managed here.

use crate::error::ApiError;
use actix_web::HttpRequest;
use serde::Deserialize;
use std::time::Duration;
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The authenticated caller as reported by the auth provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Resolve a bearer token to its user.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, ApiError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| ApiError::ExternalServiceError(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::OK => response
                .json()
                .await
                .map_err(|e| ApiError::SerializationError(e.to_string())),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => Err(
                ApiError::AuthenticationError("Invalid or expired token".to_string()),
            ),
            status => Err(ApiError::ExternalServiceError(format!(
                "Auth provider returned status {}",
                status
            ))),
        }
    }

    /// Resolve the caller of an incoming request from its `Authorization`
    /// header.
    pub async fn user_from_request(&self, req: &HttpRequest) -> Result<AuthUser, ApiError> {
        let token = bearer_token(req)?;
        self.get_user(token).await
    }
}

fn bearer_token(req: &HttpRequest) -> Result<&str, ApiError> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::AuthenticationError("Missing bearer token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn bearer_token_extracts_header() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc123"))
            .to_http_request();
        assert_eq!(bearer_token(&req).unwrap(), "abc123");
    }

    #[test]
    fn missing_or_malformed_header_is_rejected() {
        let req = TestRequest::default().to_http_request();
        assert!(bearer_token(&req).is_err());

        let req = TestRequest::default()
            .insert_header(("Authorization", "Token abc123"))
            .to_http_request();
        assert!(bearer_token(&req).is_err());

        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer "))
            .to_http_request();
        assert!(bearer_token(&req).is_err());
    }
}
