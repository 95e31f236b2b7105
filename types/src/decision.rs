//! Evaluator outputs consumed by the presentation layer.
//!
//! Decisions are built only through the named constructors below, so the
//! `has_access` flag always agrees with the reason and the purchase hint.

use std::fmt;

use serde::Serialize;

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessReason {
    Open,
    Subscribed,
    NoSubscription,
    NotIncluded,
}

impl AccessReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessReason::Open => "open",
            AccessReason::Subscribed => "subscribed",
            AccessReason::NoSubscription => "no-subscription",
            AccessReason::NotIncluded => "not-included",
        }
    }

    #[must_use]
    pub const fn grants_access(self) -> bool {
        matches!(self, AccessReason::Open | AccessReason::Subscribed)
    }
}

impl fmt::Display for AccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user has to do before the content unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionRequired {
    Login,
    Upgrade,
}

impl ActionRequired {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionRequired::Login => "login",
            ActionRequired::Upgrade => "upgrade",
        }
    }
}

impl fmt::Display for ActionRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full entitlement decision for one piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    has_access: bool,
    reason: AccessReason,
    requires_subscription: bool,
    should_show_purchase_option: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_required: Option<ActionRequired>,
}

impl AccessDecision {
    /// Open content. Never gated.
    #[must_use]
    pub fn open(message: impl Into<String>) -> Self {
        Self {
            has_access: true,
            reason: AccessReason::Open,
            requires_subscription: false,
            should_show_purchase_option: false,
            message: message.into(),
            action_required: None,
        }
    }

    #[must_use]
    pub fn subscribed(message: impl Into<String>) -> Self {
        Self {
            has_access: true,
            reason: AccessReason::Subscribed,
            requires_subscription: true,
            should_show_purchase_option: false,
            message: message.into(),
            action_required: None,
        }
    }

    /// No usable subscription: missing, lapsed, expired trial, or any non-active status.
    #[must_use]
    pub fn no_subscription(message: impl Into<String>) -> Self {
        Self {
            has_access: false,
            reason: AccessReason::NoSubscription,
            requires_subscription: true,
            should_show_purchase_option: true,
            message: message.into(),
            action_required: Some(ActionRequired::Upgrade),
        }
    }

    /// Active subscription that does not cover the requested language.
    #[must_use]
    pub fn not_included(message: impl Into<String>) -> Self {
        Self {
            has_access: false,
            reason: AccessReason::NotIncluded,
            requires_subscription: true,
            should_show_purchase_option: true,
            message: message.into(),
            action_required: Some(ActionRequired::Upgrade),
        }
    }

    /// Unauthenticated caller asking for gated content. Buying is pointless before login.
    #[must_use]
    pub fn login_required(message: impl Into<String>) -> Self {
        Self {
            has_access: false,
            reason: AccessReason::NoSubscription,
            requires_subscription: true,
            should_show_purchase_option: false,
            message: message.into(),
            action_required: Some(ActionRequired::Login),
        }
    }

    #[must_use]
    pub const fn has_access(&self) -> bool {
        self.has_access
    }

    #[must_use]
    pub const fn reason(&self) -> AccessReason {
        self.reason
    }

    #[must_use]
    pub const fn requires_subscription(&self) -> bool {
        self.requires_subscription
    }

    #[must_use]
    pub const fn should_show_purchase_option(&self) -> bool {
        self.should_show_purchase_option
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn action_required(&self) -> Option<ActionRequired> {
        self.action_required
    }
}

/// Lightweight verdict used by the strict evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessMessage {
    has_access: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_required: Option<ActionRequired>,
}

impl AccessMessage {
    #[must_use]
    pub fn granted(message: impl Into<String>) -> Self {
        Self {
            has_access: true,
            message: message.into(),
            action_required: None,
        }
    }

    #[must_use]
    pub fn denied(message: impl Into<String>, action: ActionRequired) -> Self {
        Self {
            has_access: false,
            message: message.into(),
            action_required: Some(action),
        }
    }

    #[must_use]
    pub const fn has_access(&self) -> bool {
        self.has_access
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn action_required(&self) -> Option<ActionRequired> {
        self.action_required
    }
}
