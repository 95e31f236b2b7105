//! User and subscription records as delivered by the session collaborator.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription lifecycle status.
///
/// The backend sends free-form strings. The three values the app reacts to are
/// modeled as variants; anything else is kept verbatim in `Other` so messages
/// can echo it back. Matching is exact and case-sensitive: `"Active"` is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    FreeTrial,
    Other(String),
}

impl SubscriptionStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::FreeTrial => "free trial",
            SubscriptionStatus::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }

    #[must_use]
    pub const fn is_free_trial(&self) -> bool {
        matches!(self, SubscriptionStatus::FreeTrial)
    }
}

impl From<String> for SubscriptionStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => SubscriptionStatus::Active,
            "inactive" => SubscriptionStatus::Inactive,
            "free trial" => SubscriptionStatus::FreeTrial,
            _ => SubscriptionStatus::Other(raw),
        }
    }
}

impl From<&str> for SubscriptionStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<SubscriptionStatus> for String {
    fn from(status: SubscriptionStatus) -> Self {
        match status {
            SubscriptionStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plan tier. Only `Standard`, `Basic` and `Premium` are paid plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanCategory {
    Free,
    Standard,
    Basic,
    Premium,
    Other(String),
}

impl PlanCategory {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            PlanCategory::Free => "free",
            PlanCategory::Standard => "standard",
            PlanCategory::Basic => "basic",
            PlanCategory::Premium => "premium",
            PlanCategory::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self, PlanCategory::Free)
    }

    /// Unknown categories are not paid.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        matches!(
            self,
            PlanCategory::Standard | PlanCategory::Basic | PlanCategory::Premium
        )
    }
}

impl From<String> for PlanCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "free" => PlanCategory::Free,
            "standard" => PlanCategory::Standard,
            "basic" => PlanCategory::Basic,
            "premium" => PlanCategory::Premium,
            _ => PlanCategory::Other(raw),
        }
    }
}

impl From<&str> for PlanCategory {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<PlanCategory> for String {
    fn from(category: PlanCategory) -> Self {
        match category {
            PlanCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language code as stored in a subscription or a catalog entry.
///
/// Codes are compared byte-for-byte. No case folding or trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Sentinels meaning "every language".
    pub const WILDCARDS: [&'static str; 2] = ["*", "all"];

    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        Self::WILDCARDS.contains(&self.0.as_str())
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user's subscription record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub status: SubscriptionStatus,
    pub category: PlanCategory,
    /// Ordered as received. May contain wildcard tokens.
    #[serde(default)]
    pub language: Vec<LanguageCode>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
}

impl Subscription {
    #[must_use]
    pub fn new(status: impl Into<SubscriptionStatus>, category: impl Into<PlanCategory>) -> Self {
        Self {
            status: status.into(),
            category: category.into(),
            language: Vec::new(),
            start_date: None,
            end_date: None,
            next_payment_date: None,
        }
    }

    #[must_use]
    pub fn with_languages<I, L>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LanguageCode>,
    {
        self.language = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Exact membership test against the language list. Wildcards are not expanded.
    #[must_use]
    pub fn lists_language(&self, code: &str) -> bool {
        self.language.iter().any(|entry| entry.as_str() == code)
    }

    #[must_use]
    pub fn has_wildcard_language(&self) -> bool {
        self.language.iter().any(LanguageCode::is_wildcard)
    }
}

/// An authenticated user. Unauthenticated callers are represented by `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            subscription: None,
        }
    }

    #[must_use]
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = Some(subscription);
        self
    }

    #[must_use]
    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }
}
