// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Response parsers for the store's REST surface.
//!
//! Successful responses wrap documents in a `data` envelope; a body
//! without it fails deserialization and surfaces as
//! [`StoreError::InvalidResponse`](crate::StoreError::InvalidResponse)
//! at the call site rather than a null-reference fault.

use crate::types::{Event, EventId};

/// Response of `GET /events`: a list envelope.
#[derive(Debug, serde::Deserialize)]
pub struct EventListResponse {
    /// Documents in the store's return order.
    pub data: Vec<EventDocument>,
}

impl EventListResponse {
    /// Converts the envelope into events, preserving the store's order.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.data.into_iter().map(Event::from).collect()
    }
}

/// Response of `POST /events` and `PUT /events/{id}`: a single-document envelope.
#[derive(Debug, serde::Deserialize)]
pub struct EventResponse {
    /// The canonical document as the store now holds it.
    pub data: EventDocument,
}

impl EventResponse {
    /// Converts the envelope into the canonical event.
    #[must_use]
    pub fn into_event(self) -> Event {
        Event::from(self.data)
    }
}

/// A single event document in the store's wire shape.
#[derive(Debug, serde::Deserialize)]
pub struct EventDocument {
    /// Store-assigned identifier.
    pub id: EventId,
    /// The writable attributes.
    pub attributes: EventAttributes,
}

/// The attribute block of an event document.
///
/// The store may send `null` for unset attributes; both map to the
/// empty string.
#[derive(Debug, Default, serde::Deserialize)]
pub struct EventAttributes {
    /// The event name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// The event description.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl From<EventDocument> for Event {
    fn from(doc: EventDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.attributes.name.unwrap_or_default(),
            description: doc.attributes.description.unwrap_or_default(),
        }
    }
}

/// Response of `POST /auth/local`.
///
/// The store signals rejected credentials by answering without a `jwt`
/// field, so its absence is data, not an error shape.
#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    /// The issued session token, present only on success.
    #[serde(default)]
    pub jwt: Option<String>,
}
