// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Event store client for CRUD and login operations.

use std::sync::Arc;

use reqwest::Method;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::http::HttpClient;
use crate::request::{EventWriteRequest, LoginRequest};
use crate::response::{EventListResponse, EventResponse, LoginResponse};
use crate::types::{Event, EventContent, EventId, SessionToken};

/// Client for a Strapi-style event store.
///
/// The client is stateless with respect to the event collection: every
/// operation returns the store's canonical answer and never caches or
/// mutates a local copy. Callers reconcile confirmed results into their
/// own state.
///
/// # Example
///
/// ```ignore
/// use evman_client::{StoreClient, StoreConfig};
///
/// # async fn example() -> Result<(), evman_client::StoreError> {
/// let client = StoreClient::new(StoreConfig::default())?;
/// let events = client.list_events().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Arc<HttpClient>,
    config: StoreConfig,
}

impl StoreClient {
    /// Creates a new store client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Exchanges credentials for a session token at `POST /auth/local`.
    ///
    /// A response body carrying a `jwt` field means success, whatever
    /// the status code; a readable body without one means the store
    /// rejected the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Auth`] on rejected credentials,
    /// [`StoreError::Http`] on transport failure, and
    /// [`StoreError::InvalidResponse`] if a success response carries an
    /// unreadable body.
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<SessionToken, StoreError> {
        tracing::debug!(identifier, "logging in");
        let url = self.full_url("/auth/local");
        let body = LoginRequest {
            identifier,
            password,
        };

        let resp = self
            .http
            .send(self.http.build_request(Method::POST, &url).json(&body))
            .await?;

        let status = resp.status();
        match resp.json::<LoginResponse>().await {
            Ok(LoginResponse { jwt: Some(jwt) }) => Ok(SessionToken::new(jwt)),
            Ok(LoginResponse { jwt: None }) => {
                Err(StoreError::Auth("invalid credentials".to_string()))
            }
            Err(e) if status.is_success() => Err(StoreError::InvalidResponse(e.to_string())),
            Err(_) => Err(StoreError::Auth(format!("login rejected: {status}"))),
        }
    }

    /// Fetches all events in the store's return order.
    ///
    /// No client-side sorting is applied.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed body.
    pub async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        tracing::debug!("listing events");
        let url = self.full_url("/events");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        let list = decode::<EventListResponse>(resp).await?;
        Ok(list.into_events())
    }

    /// Creates a new event and returns the canonical record with its
    /// server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails; nothing is created on error.
    pub async fn create_event(&self, content: &EventContent) -> Result<Event, StoreError> {
        tracing::debug!(name = %content.name, "creating event");
        let url = self.full_url("/events");
        let body = EventWriteRequest::new(content);

        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(&body))
            .await?;

        let doc = decode::<EventResponse>(resp).await?;
        Ok(doc.into_event())
    }

    /// Updates an existing event and returns the canonical record.
    ///
    /// Existence is not pre-validated; a stale identifier surfaces as
    /// [`StoreError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn update_event(
        &self,
        id: EventId,
        content: &EventContent,
    ) -> Result<Event, StoreError> {
        tracing::debug!(%id, "updating event");
        let url = self.full_url(&format!("/events/{id}"));
        let body = EventWriteRequest::new(content);

        let resp = self
            .http
            .execute(self.http.build_request(Method::PUT, &url).json(&body))
            .await?;

        let doc = decode::<EventResponse>(resp).await?;
        Ok(doc.into_event())
    }

    /// Deletes an event. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails; the store is unchanged on error.
    pub async fn delete_event(&self, id: EventId) -> Result<(), StoreError> {
        tracing::debug!(%id, "deleting event");
        let url = self.full_url(&format!("/events/{id}"));

        self.http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await?;

        Ok(())
    }

    /// Builds a full URL from a path under the API base.
    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

/// Decodes a success body, mapping malformed JSON to `InvalidResponse`.
async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, StoreError> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| StoreError::InvalidResponse(e.to_string()))
}
