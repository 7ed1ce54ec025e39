// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::types::SessionToken;

/// How requests to the store are authenticated.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication.
    #[serde(rename = "none")]
    #[default]
    None,
    /// Bearer token authentication (session token from `/auth/local`).
    #[serde(rename = "bearer")]
    Bearer {
        /// Bearer token.
        token: String,
    },
}

/// Remote event store configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store API, e.g. `http://localhost:1337/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Authentication method.
    #[serde(default)]
    pub auth: AuthMethod,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl StoreConfig {
    /// Returns the same configuration with bearer auth set to `token`.
    #[must_use]
    pub fn with_token(mut self, token: &SessionToken) -> Self {
        self.auth = AuthMethod::Bearer {
            token: token.as_str().to_string(),
        };
        self
    }

    /// Returns the same configuration with authentication removed.
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.auth = AuthMethod::None;
        self
    }
}

fn default_base_url() -> String {
    "http://localhost:1337/api".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("evman-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
