//! Config file driving the evaluators

use std::fs;

use chrono::{NaiveDate, TimeZone, Utc};
use rhapsody_config::RhapsodyConfig;
use rhapsody_core::{AccessPolicy, page_range};
use rhapsody_types::Content;

use crate::common::subscriber;

#[test]
fn configured_trial_extends_access() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[trial]\nlast_day = \"2026-03-31\"\n\n[daily]\nleading_pages = 2\npages_per_article = 2\n",
    )
    .unwrap();

    let config = RhapsodyConfig::load_from(&path).unwrap();
    let policy = AccessPolicy::from_config(&config);
    let user = subscriber("free trial", "basic", &[]);
    let content = Content::subscription("fr");

    let february = Utc.with_ymd_and_hms(2026, 2, 10, 8, 0, 0).unwrap();
    let april = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
    assert!(policy.grants(Some(&user), &content, february));
    assert!(!policy.grants(Some(&user), &content, april));

    let range = page_range(
        &config.daily(),
        NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
    );
    assert_eq!(range.to_string(), "21-22");
}

#[test]
fn default_config_uses_year_end_trial() {
    let config = RhapsodyConfig::default();
    assert_eq!(
        config.trial().last_day(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    );
}
