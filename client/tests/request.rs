// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wire-shape tests for request bodies.

use evman_client::{EventContent, EventWriteRequest, LoginRequest};
use serde_json::json;

#[test]
fn request_event_write_uses_data_envelope() {
    let content = EventContent::new("Team sync", "Weekly planning call");
    let body = serde_json::to_value(EventWriteRequest::new(&content)).expect("Failed to serialize");

    assert_eq!(
        body,
        json!({ "data": { "Name": "Team sync", "Description": "Weekly planning call" } })
    );
}

#[test]
fn request_login_uses_identifier_and_password() {
    let body = serde_json::to_value(LoginRequest {
        identifier: "alice",
        password: "secret",
    })
    .expect("Failed to serialize");

    assert_eq!(body, json!({ "identifier": "alice", "password": "secret" }));
}
