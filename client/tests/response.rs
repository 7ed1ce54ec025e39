// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wire-shape tests for response envelopes.

use evman_client::{EventId, EventListResponse, EventResponse, LoginResponse};

#[test]
fn response_list_envelope_parses_in_order() {
    let body = r#"{
        "data": [
            { "id": 1, "attributes": { "Name": "A", "Description": "first" } },
            { "id": 2, "attributes": { "Name": "B", "Description": "second" } }
        ],
        "meta": { "pagination": { "page": 1, "pageSize": 25, "total": 2 } }
    }"#;

    let resp: EventListResponse = serde_json::from_str(body).expect("Failed to parse list");
    let events = resp.into_events();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, EventId::new(1));
    assert_eq!(events[0].name, "A");
    assert_eq!(events[1].description, "second");
}

#[test]
fn response_null_attributes_map_to_empty() {
    let body = r#"{
        "data": { "id": 4, "attributes": { "Name": "Only name", "Description": null } }
    }"#;

    let resp: EventResponse = serde_json::from_str(body).expect("Failed to parse document");
    let event = resp.into_event();

    assert_eq!(event.name, "Only name");
    assert_eq!(event.description, "");
}

#[test]
fn response_missing_data_field_fails() {
    let body = r#"{ "error": { "status": 500 } }"#;

    assert!(serde_json::from_str::<EventListResponse>(body).is_err());
    assert!(serde_json::from_str::<EventResponse>(body).is_err());
}

#[test]
fn response_login_jwt_optional() {
    let ok: LoginResponse =
        serde_json::from_str(r#"{ "jwt": "abc", "user": {} }"#).expect("Failed to parse login");
    assert_eq!(ok.jwt.as_deref(), Some("abc"));

    let rejected: LoginResponse =
        serde_json::from_str(r#"{ "error": { "message": "Invalid" } }"#)
            .expect("Failed to parse rejection");
    assert!(rejected.jwt.is_none());
}
