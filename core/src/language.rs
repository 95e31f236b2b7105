//! Trial-aware entitlement evaluator.
//!
//! Layered over the same records as [`crate::subscription`], with two extra
//! rules: a `free trial` status unlocks everything until the trial window
//! closes, and the language tokens `"*"` / `"all"` cover every language.
//! The plan category is not consulted.

use chrono::{DateTime, Utc};
use rhapsody_types::{AccessDecision, Content, LanguageCode, Subscription, TrialWindow, User};

fn language_name(content: &Content) -> &str {
    content
        .label()
        .map_or("this language", LanguageCode::as_str)
}

/// Decide access for an already-authenticated caller.
///
/// `subscription` is `None` when the user has no subscription record.
#[must_use]
pub fn check_language_access(
    subscription: Option<&Subscription>,
    content: &Content,
    trial: &TrialWindow,
    now: DateTime<Utc>,
) -> AccessDecision {
    if content.is_open() {
        return AccessDecision::open("This language is free for all readers.");
    }

    let name = language_name(content);
    let Some(subscription) = subscription else {
        return AccessDecision::no_subscription(format!("Subscribe to read {name}."));
    };

    if subscription.status.is_free_trial() {
        if trial.includes(now) {
            return AccessDecision::subscribed(format!(
                "Free trial: full access until {}.",
                trial.last_day()
            ));
        }
        tracing::debug!(last_day = %trial.last_day(), %now, "Free trial expired");
        return AccessDecision::no_subscription(format!(
            "Your free trial ended on {}. Subscribe to keep reading.",
            trial.last_day()
        ));
    }

    if !subscription.status.is_active() {
        tracing::debug!(status = %subscription.status, "Subscription not active");
        return AccessDecision::no_subscription(format!(
            "Your subscription is {}. Renew it to continue reading.",
            subscription.status
        ));
    }

    let covered = subscription.has_wildcard_language()
        || content
            .label()
            .is_some_and(|label| subscription.lists_language(label.as_str()));
    if covered {
        AccessDecision::subscribed(format!("{name} is included in your subscription."))
    } else {
        tracing::debug!(language = name, "Language not in subscription");
        AccessDecision::not_included(format!(
            "Your subscription does not include {name}. Upgrade to add it."
        ))
    }
}

/// Outer-layer variant that also resolves the user.
///
/// Unauthenticated callers are refused for every content type with a login
/// prompt, matching [`crate::subscription::has_language_access`].
#[must_use]
pub fn check_user_language_access(
    user: Option<&User>,
    content: &Content,
    trial: &TrialWindow,
    now: DateTime<Utc>,
) -> AccessDecision {
    match user {
        Some(user) => check_language_access(user.subscription(), content, trial, now),
        None => AccessDecision::login_required("Please log in to read this language."),
    }
}
