// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status mapping.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::{AuthMethod, StoreConfig};
use crate::error::StoreError;

/// HTTP client for event store operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: StoreConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request with authentication headers.
    pub fn build_request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method, url);

        match &self.config.auth {
            AuthMethod::Bearer { token } => {
                req = req.bearer_auth(token);
            }
            AuthMethod::None => {}
        }

        req
    }

    /// Sends a request, mapping only transport failures.
    ///
    /// The response is returned whatever its status code; callers that
    /// need to inspect rejection bodies (the login flow) use this.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent.
    pub async fn send(&self, req: RequestBuilder) -> Result<Response, StoreError> {
        let resp = req.send().await?;
        Ok(resp)
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, StoreError> {
        let req = req.build().map_err(|e| StoreError::Http(e.to_string()))?;
        let path = req.url().path().to_string();
        let resp = self.client.execute(req).await?;

        match resp.status() {
            status if status.is_success() => Ok(resp),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let text = read_body(resp).await;
                Err(StoreError::Auth(text))
            }
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(path)),
            status => {
                let text = read_body(resp).await;
                Err(StoreError::Http(format!("{status}: {text}")))
            }
        }
    }
}

async fn read_body(resp: Response) -> String {
    resp.text()
        .await
        .unwrap_or_else(|_| "Unable to read response".to_string())
}
