//! Entitlement evaluator properties

use rhapsody_core::{
    access_message, check_language_access, check_user_language_access,
    filter_accessible_languages, has_language_access, has_subscription_access,
    should_show_upgrade_prompt, user_language_codes,
};
use rhapsody_types::{AccessReason, ActionRequired, Content, LanguageCode};

use crate::common::{after_trial, catalog, during_trial, guest, subscriber, trial};

#[test]
fn open_content_is_granted_to_any_user() {
    let open = Content::open("en");
    for user in [
        guest(),
        subscriber("inactive", "free", &[]),
        subscriber("active", "premium", &["fr"]),
        subscriber("free trial", "basic", &[]),
    ] {
        assert!(has_language_access(Some(&user), &open));
        let decision = check_language_access(user.subscription(), &open, &trial(), after_trial());
        assert!(decision.has_access());
        assert_eq!(decision.reason(), AccessReason::Open);
    }
}

#[test]
fn missing_user_is_refused_with_login() {
    for content in catalog() {
        assert!(!has_language_access(None, &content));
        assert_eq!(
            access_message(None, &content).action_required(),
            Some(ActionRequired::Login)
        );
        assert_eq!(
            check_user_language_access(None, &content, &trial(), during_trial()).action_required(),
            Some(ActionRequired::Login)
        );
    }
}

#[test]
fn free_category_never_has_subscription_access() {
    for status in ["active", "inactive", "free trial", "cancelled", "Active"] {
        let user = subscriber(status, "free", &["en", "fr", "*"]);
        assert!(!has_subscription_access(Some(&user), None));
        assert!(!has_subscription_access(Some(&user), Some("fr")));
    }
}

#[test]
fn premium_language_list_is_enforced() {
    let user = subscriber("active", "premium", &["fr", "es"]);
    assert!(has_subscription_access(Some(&user), Some("fr")));
    assert!(!has_subscription_access(Some(&user), Some("de")));
}

#[test]
fn trial_before_cutoff_unlocks_unlisted_language() {
    let user = subscriber("free trial", "basic", &["en"]);
    let decision = check_language_access(
        user.subscription(),
        &Content::subscription("yo"),
        &trial(),
        during_trial(),
    );
    assert!(decision.has_access());
    assert_eq!(decision.reason(), AccessReason::Subscribed);
}

#[test]
fn trial_after_cutoff_is_refused() {
    let user = subscriber("free trial", "basic", &["en"]);
    let decision = check_language_access(
        user.subscription(),
        &Content::subscription("en"),
        &trial(),
        after_trial(),
    );
    assert!(!decision.has_access());
    assert_eq!(decision.reason(), AccessReason::NoSubscription);
    assert!(decision.should_show_purchase_option());
}

#[test]
fn wildcard_grants_every_label() {
    let user = subscriber("active", "standard", &["*"]);
    for content in catalog() {
        let decision = check_language_access(user.subscription(), &content, &trial(), after_trial());
        assert!(decision.has_access(), "{content:?} should be granted");
    }
}

#[test]
fn filter_without_user_is_always_empty() {
    let entries = catalog();
    for len in 1..=entries.len() {
        assert!(filter_accessible_languages(None, &entries[..len]).is_empty());
    }
}

#[test]
fn filter_respects_catalog_order() {
    let user = subscriber("active", "basic", &["es", "de"]);
    let entries = catalog();
    let labels: Vec<&str> = filter_accessible_languages(Some(&user), &entries)
        .into_iter()
        .filter_map(Content::label)
        .map(LanguageCode::as_str)
        .collect();
    assert_eq!(labels, ["en", "es", "de"]);
}

#[test]
fn upgrade_prompt_and_codes_follow_subscription() {
    let guest = guest();
    assert!(should_show_upgrade_prompt(Some(&guest)));
    assert!(user_language_codes(Some(&guest)).is_empty());

    let paid = subscriber("active", "premium", &["fr", "es"]);
    assert!(!should_show_upgrade_prompt(Some(&paid)));
    assert_eq!(
        user_language_codes(Some(&paid)),
        [LanguageCode::from("fr"), LanguageCode::from("es")]
    );
}

#[test]
fn evaluations_are_idempotent() {
    let user = subscriber("active", "premium", &["fr"]);
    for content in catalog() {
        assert_eq!(
            has_language_access(Some(&user), &content),
            has_language_access(Some(&user), &content)
        );
        assert_eq!(
            access_message(Some(&user), &content),
            access_message(Some(&user), &content)
        );
        let first = check_language_access(user.subscription(), &content, &trial(), after_trial());
        let second = check_language_access(user.subscription(), &content, &trial(), after_trial());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn decision_json_for_presentation() {
    let user = subscriber("active", "premium", &["fr"]);
    let decision = check_language_access(
        user.subscription(),
        &Content::subscription("de"),
        &trial(),
        after_trial(),
    );
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["hasAccess"], false);
    assert_eq!(json["reason"], "not-included");
    assert_eq!(json["shouldShowPurchaseOption"], true);
    insta::assert_snapshot!(decision.message(), @"Your subscription does not include de. Upgrade to add it.");
}
