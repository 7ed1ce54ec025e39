// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Event store client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP transport or unexpected-status error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Credentials rejected by the store.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The request referenced a resource the store no longer has.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The store answered with a body the client cannot make sense of.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl StoreError {
    /// Whether the error means the caller's credentials were rejected.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Whether the error means the referenced resource is gone server-side.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
