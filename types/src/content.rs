//! Catalog content descriptors.

use serde::{Deserialize, Serialize};

use crate::LanguageCode;

/// Wire shape used by the catalog: `{ "type"?, "value"?, "label"? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawContent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<LanguageCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<LanguageCode>,
}

/// A piece of catalog content, keyed by the language it is published in.
///
/// The access type is the primary branch key for every evaluator. Catalog
/// entries without a recognizable `type` deserialize as `Subscription`, so
/// ambiguous content always requires an entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawContent", into = "RawContent")]
pub enum Content {
    /// Readable by any authenticated user.
    Open { label: Option<LanguageCode> },
    /// Requires an active subscription covering `label`.
    Subscription { label: Option<LanguageCode> },
}

impl Content {
    #[must_use]
    pub fn open(label: impl Into<LanguageCode>) -> Self {
        Content::Open {
            label: Some(label.into()),
        }
    }

    #[must_use]
    pub fn subscription(label: impl Into<LanguageCode>) -> Self {
        Content::Subscription {
            label: Some(label.into()),
        }
    }

    /// Subscription content with no identifying label.
    #[must_use]
    pub const fn unlabeled() -> Self {
        Content::Subscription { label: None }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Content::Open { .. })
    }

    #[must_use]
    pub fn label(&self) -> Option<&LanguageCode> {
        match self {
            Content::Open { label } | Content::Subscription { label } => label.as_ref(),
        }
    }
}

impl From<RawContent> for Content {
    fn from(raw: RawContent) -> Self {
        let label = raw.value.or(raw.label);
        match raw.kind.as_deref() {
            Some("open") => Content::Open { label },
            _ => Content::Subscription { label },
        }
    }
}

impl From<Content> for RawContent {
    fn from(content: Content) -> Self {
        let (kind, value) = match content {
            Content::Open { label } => ("open", label),
            Content::Subscription { label } => ("subscription", label),
        };
        Self {
            kind: Some(kind.to_string()),
            value,
            label: None,
        }
    }
}
