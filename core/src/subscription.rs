//! Strict entitlement evaluator.
//!
//! Status must be exactly `active`. Trials, lapsed plans and unknown statuses
//! are all treated as "no subscription". Language lists are matched literally;
//! wildcard tokens get no special meaning here.

use rhapsody_types::{AccessMessage, ActionRequired, Content, LanguageCode, User};

/// Whether `user` may read `content`.
///
/// Unauthenticated callers are always refused, even for open content.
#[must_use]
pub fn has_language_access(user: Option<&User>, content: &Content) -> bool {
    if user.is_none() {
        return false;
    }
    match content {
        Content::Open { .. } => true,
        Content::Subscription { label } => {
            has_subscription_access(user, label.as_ref().map(LanguageCode::as_str))
        }
    }
}

/// Whether `user` holds an active paid plan, optionally covering `language_code`.
///
/// Without a code this is the coarse "has some paid plan" check.
#[must_use]
pub fn has_subscription_access(user: Option<&User>, language_code: Option<&str>) -> bool {
    let Some(subscription) = user.and_then(User::subscription) else {
        return false;
    };
    if !subscription.status.is_active() || !subscription.category.is_paid() {
        return false;
    }
    language_code.is_none_or(|code| subscription.lists_language(code))
}

#[must_use]
pub fn access_message(user: Option<&User>, content: &Content) -> AccessMessage {
    let Some(user) = user else {
        return AccessMessage::denied(
            "Please log in to access this content.",
            ActionRequired::Login,
        );
    };
    if content.is_open() {
        return AccessMessage::granted("This content is free to read.");
    }
    let Some(subscription) = user.subscription() else {
        return AccessMessage::denied(
            "Subscribe to access this content.",
            ActionRequired::Upgrade,
        );
    };
    if !subscription.status.is_active() {
        tracing::debug!(status = %subscription.status, "Subscription not active");
        return AccessMessage::denied(
            "Your subscription is not active. Renew it to continue reading.",
            ActionRequired::Upgrade,
        );
    }
    if subscription.category.is_free() {
        return AccessMessage::denied(
            "Upgrade to a paid plan to access this content.",
            ActionRequired::Upgrade,
        );
    }
    AccessMessage::granted(format!(
        "You have access with your {} plan.",
        subscription.category
    ))
}

/// The entries of `languages` that `user` can read, in input order.
#[must_use]
pub fn filter_accessible_languages<'a>(
    user: Option<&User>,
    languages: &'a [Content],
) -> Vec<&'a Content> {
    if user.is_none() {
        return Vec::new();
    }
    languages
        .iter()
        .filter(|content| has_language_access(user, content))
        .collect()
}

#[must_use]
pub fn should_show_upgrade_prompt(user: Option<&User>) -> bool {
    match user.and_then(User::subscription) {
        Some(subscription) => subscription.category.is_free(),
        None => true,
    }
}

/// Languages of an active subscription; empty otherwise.
#[must_use]
pub fn user_language_codes(user: Option<&User>) -> &[LanguageCode] {
    match user.and_then(User::subscription) {
        Some(subscription) if subscription.status.is_active() => subscription.language.as_slice(),
        _ => &[],
    }
}
