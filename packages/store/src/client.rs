use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::types::{Todo, TodoPatch};

/// Error body as PostgREST reports it.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Client for the todo collection on a Supabase PostgREST endpoint.
///
/// Cheap to clone; the underlying `reqwest::Client` is a shared handle.
/// Every outbound call carries the configured request timeout.
#[derive(Clone)]
pub struct TodoStore {
    http_client: Client,
    project_url: String,
    anon_key: String,
}

impl TodoStore {
    pub fn new(
        project_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> StoreResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            project_url: project_url.into(),
            anon_key: anon_key.into(),
        })
    }

    pub fn project_url(&self) -> &str {
        &self.project_url
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/todo", self.project_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.anon_key))
    }

    /// All rows, newest first.
    pub async fn list(&self) -> StoreResult<Vec<Todo>> {
        let response = self
            .request(Method::GET, &self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Insert one row with default `completed`; returns the row as the
    /// store assigned it.
    pub async fn insert(&self, task: &str) -> StoreResult<Todo> {
        let response = self
            .request(Method::POST, &self.table_url())
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "task": task }))
            .send()
            .await?;

        let rows: Vec<Todo> = Self::decode(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::InvalidResponse("insert returned no rows".to_string()))
    }

    /// Patch the row matching `id`; `None` when no row matched.
    pub async fn update(&self, id: i64, patch: &TodoPatch) -> StoreResult<Option<Todo>> {
        let response = self
            .request(Method::PATCH, &self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;

        let rows: Vec<Todo> = Self::decode(response).await?;
        Ok(rows.into_iter().next())
    }

    /// Delete the row matching `id`; returns its last-known state, or
    /// `None` when no row matched.
    pub async fn delete(&self, id: i64) -> StoreResult<Option<Todo>> {
        let response = self
            .request(Method::DELETE, &self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let rows: Vec<Todo> = Self::decode(response).await?;
        Ok(rows.into_iter().next())
    }

    /// Exact row count, served from the Content-Range header of a
    /// zero-width range request.
    pub async fn count(&self) -> StoreResult<u64> {
        let response = self
            .request(Method::GET, &self.table_url())
            .query(&[("select", "id")])
            .header("Prefer", "count=exact")
            .header(header::RANGE, "0-0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let content_range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                StoreError::InvalidResponse("missing Content-Range header".to_string())
            })?;

        // PostgREST reports "0-0/42", or "*/0" for an empty table.
        content_range
            .rsplit('/')
            .next()
            .and_then(|total| total.parse().ok())
            .ok_or_else(|| {
                StoreError::InvalidResponse(format!("unparseable Content-Range: {content_range}"))
            })
    }

    /// Connectivity probe: REST root first, then a one-row select against
    /// the todo table so a missing table surfaces as a structured error.
    pub async fn check_connection(&self) -> StoreResult<()> {
        let root = format!("{}/rest/v1/", self.project_url);
        let response = self.request(Method::GET, &root).send().await?;
        debug!("REST root probe returned {}", response.status());
        if !response.status().is_success() {
            return Err(StoreError::Network(format!(
                "REST endpoint returned {}",
                response.status()
            )));
        }

        let response = self
            .request(Method::GET, &self.table_url())
            .query(&[("select", "*"), ("limit", "1")])
            .send()
            .await?;

        let _rows: Vec<Todo> = Self::decode(response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    async fn error_from_response(response: Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<PostgrestError>(&body) {
            Ok(err) => StoreError::Api {
                message: err
                    .message
                    .unwrap_or_else(|| format!("store returned {status}")),
                code: err.code,
                details: err.details,
                hint: err.hint,
            },
            Err(_) => StoreError::Api {
                message: if body.is_empty() {
                    format!("store returned {status}")
                } else {
                    body
                },
                code: None,
                details: None,
                hint: None,
            },
        }
    }
}
