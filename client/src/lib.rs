// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for a Strapi-style event store: session-token login plus
//! CRUD on the `/events` collection.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::single_match_else, clippy::similar_names)]

mod client;
mod config;
mod error;
mod http;
mod request;
mod response;
mod types;

pub use crate::client::StoreClient;
pub use crate::config::{AuthMethod, StoreConfig};
pub use crate::error::StoreError;
pub use crate::request::{EventWriteRequest, LoginRequest};
pub use crate::response::{
    EventAttributes, EventDocument, EventListResponse, EventResponse, LoginResponse,
};
pub use crate::types::{Event, EventContent, EventId, SessionToken};
