//! Minimal PostgREST client for the Supabase backend.
//!
//! Every row-level query is scoped by the owning user id; the database's
//! row-level-security policies are the backstop, this client is the
//! convention.

use crate::error::ApiError;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
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

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Select every row of `table` owned by `user_id`, ordered per the
    /// PostgREST `order` expression (e.g. `created_at.desc`).
    pub async fn select_by_user_id<T: DeserializeOwned>(
        &self,
        table: &str,
        user_id: Uuid,
        order: &str,
        limit: Option<i32>,
    ) -> Result<Vec<T>, ApiError> {
        let mut query = vec![
            ("user_id".to_string(), format!("eq.{}", user_id)),
            ("order".to_string(), order.to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit".to_string(), limit.to_string()));
        }

        self.fetch_rows(table, &query).await
    }

    /// Same as `select_by_user_id` with one extra equality filter.
    pub async fn select_by_user_and<T: DeserializeOwned>(
        &self,
        table: &str,
        user_id: Uuid,
        column: &str,
        value: &str,
        order: &str,
    ) -> Result<Vec<T>, ApiError> {
        let query = vec![
            ("user_id".to_string(), format!("eq.{}", user_id)),
            (column.to_string(), format!("eq.{}", value)),
            ("order".to_string(), order.to_string()),
        ];

        self.fetch_rows(table, &query).await
    }

    /// Select a single row matching one equality filter, regardless of
    /// owner. Used for public lookups such as share codes.
    pub async fn select_one_by<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Option<T>, ApiError> {
        let query = vec![
            (column.to_string(), format!("eq.{}", value)),
            ("limit".to_string(), "1".to_string()),
        ];

        let mut rows = self.fetch_rows(table, &query).await?;
        Ok(rows.pop())
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>, ApiError> {
        let response = self
            .authed(self.client.get(self.table_url(table)).query(query))
            .send()
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .map_err(|e| ApiError::SerializationError(e.to_string())),
            status => Err(ApiError::DatabaseError(format!(
                "Unexpected status code: {}",
                status
            ))),
        }
    }

    /// Insert one row and return the stored representation.
    pub async fn insert_returning<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        data: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(data)
            .send()
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => {
                let mut rows: Vec<T> = response
                    .json()
                    .await
                    .map_err(|e| ApiError::SerializationError(e.to_string()))?;
                rows.pop().ok_or_else(|| {
                    ApiError::DatabaseError("Insert returned no representation".to_string())
                })
            }
            status => Err(ApiError::DatabaseError(format!(
                "Failed to insert data: {}",
                status
            ))),
        }
    }

    /// Update the row with `id` owned by `user_id` and return the stored
    /// representation. A non-matching id/owner pair is reported as not
    /// found.
    pub async fn update_returning<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        id: Uuid,
        user_id: Uuid,
        data: &B,
    ) -> Result<T, ApiError> {
        let query = [
            ("id".to_string(), format!("eq.{}", id)),
            ("user_id".to_string(), format!("eq.{}", user_id)),
        ];

        let response = self
            .authed(self.client.patch(self.table_url(table)).query(&query))
            .header("Prefer", "return=representation")
            .json(data)
            .send()
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let mut rows: Vec<T> = response
                    .json()
                    .await
                    .map_err(|e| ApiError::SerializationError(e.to_string()))?;
                rows.pop()
                    .ok_or_else(|| ApiError::NotFound("Row not found".to_string()))
            }
            status => Err(ApiError::DatabaseError(format!(
                "Failed to update data: {}",
                status
            ))),
        }
    }

    /// Update a row by id alone. Used for counters on public rows.
    pub async fn update_by_id<B: Serialize>(
        &self,
        table: &str,
        id: Uuid,
        data: &B,
    ) -> Result<(), ApiError> {
        let query = [("id".to_string(), format!("eq.{}", id))];

        let response = self
            .authed(self.client.patch(self.table_url(table)).query(&query))
            .json(data)
            .send()
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => Err(ApiError::DatabaseError(format!(
                "Failed to update data: {}",
                status
            ))),
        }
    }

    /// Delete the row with `id` owned by `user_id`.
    pub async fn delete_scoped(
        &self,
        table: &str,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<(), ApiError> {
        let query = [
            ("id".to_string(), format!("eq.{}", id)),
            ("user_id".to_string(), format!("eq.{}", user_id)),
        ];

        let response = self
            .authed(self.client.delete(self.table_url(table)).query(&query))
            .send()
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => Err(ApiError::DatabaseError(format!(
                "Failed to delete data: {}",
                status
            ))),
        }
    }
}
