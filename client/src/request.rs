// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Request bodies for the store's REST surface.
//!
//! The store wraps writable fields in a `data` envelope and expects the
//! capitalized attribute names `Name` and `Description` on the wire.

use crate::types::EventContent;

/// Body of `POST /events` and `PUT /events/{id}`.
#[derive(Debug, serde::Serialize)]
pub struct EventWriteRequest<'a> {
    data: EventFields<'a>,
}

#[derive(Debug, serde::Serialize)]
struct EventFields<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
}

impl<'a> EventWriteRequest<'a> {
    /// Wraps event content in the store's `data` envelope.
    #[must_use]
    pub fn new(content: &'a EventContent) -> Self {
        Self {
            data: EventFields {
                name: &content.name,
                description: &content.description,
            },
        }
    }
}

/// Body of `POST /auth/local`.
#[derive(Debug, serde::Serialize)]
pub struct LoginRequest<'a> {
    /// Username or email, as the store accepts either.
    pub identifier: &'a str,
    /// The account secret.
    pub password: &'a str,
}
