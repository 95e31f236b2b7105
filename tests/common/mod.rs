//! Shared test utilities and fixtures
//!
//! Backend-shaped session and catalog snapshots used across the suite.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rhapsody_types::{Content, TrialWindow, User};

/// Build a user from the JSON the session collaborator hands over.
pub fn user_from_json(value: serde_json::Value) -> User {
    serde_json::from_value(value).expect("fixture user must deserialize")
}

pub fn subscriber(status: &str, category: &str, languages: &[&str]) -> User {
    user_from_json(serde_json::json!({
        "id": "reader-1",
        "email": "reader@example.com",
        "subscription": {
            "status": status,
            "category": category,
            "language": languages,
            "start_date": "2025-01-01T00:00:00Z",
            "end_date": null,
            "next_payment_date": "2025-02-01T00:00:00Z"
        }
    }))
}

pub fn guest() -> User {
    user_from_json(serde_json::json!({ "id": "reader-2" }))
}

/// Catalog as delivered: a mix of open and gated languages, one entry untyped.
pub fn catalog() -> Vec<Content> {
    serde_json::from_value(serde_json::json!([
        { "type": "open", "value": "en", "label": "English" },
        { "type": "subscription", "value": "fr", "label": "French" },
        { "type": "subscription", "value": "es", "label": "Spanish" },
        { "value": "de", "label": "German" },
        { "type": "subscription", "value": "yo", "label": "Yoruba" }
    ]))
    .expect("fixture catalog must deserialize")
}

pub fn trial() -> TrialWindow {
    TrialWindow::new(NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date"))
}

pub fn during_trial() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 15, 9, 30, 0)
        .single()
        .expect("valid instant")
}

pub fn after_trial() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 2, 9, 30, 0)
        .single()
        .expect("valid instant")
}
