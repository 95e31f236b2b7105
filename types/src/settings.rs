//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated, resolved configuration state.
//! Raw TOML deserialization structs stay private in `rhapsody-config`, which
//! resolves them into these types at the parse boundary.

use std::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Last calendar day of the promotional free trial when no config overrides it.
pub const DEFAULT_TRIAL_LAST_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 31) {
    Some(day) => day,
    None => panic!("default trial day must be a valid date"),
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("pages_per_article must be at least 1")]
    ZeroPagesPerArticle,
}

/// Free-trial period, closed on its last day.
///
/// The whole last day counts: a trial ending 2025-12-31 still grants access at
/// 2025-12-31T23:59:59.999Z and stops at 2026-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrialWindow {
    last_day: NaiveDate,
}

impl TrialWindow {
    #[must_use]
    pub const fn new(last_day: NaiveDate) -> Self {
        Self { last_day }
    }

    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    #[must_use]
    pub fn includes(&self, now: DateTime<Utc>) -> bool {
        now.date_naive() <= self.last_day
    }
}

impl Default for TrialWindow {
    fn default() -> Self {
        Self::new(DEFAULT_TRIAL_LAST_DAY)
    }
}

/// Page layout of a monthly edition PDF.
///
/// Invariant: `pages_per_article >= 1` (enforced at construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DailyArticleLayout {
    leading_pages: u32,
    pages_per_article: NonZeroU32,
}

impl DailyArticleLayout {
    pub const DEFAULT_PAGES_PER_ARTICLE: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);

    pub fn new(leading_pages: u32, pages_per_article: u32) -> Result<Self, SettingsError> {
        let pages_per_article =
            NonZeroU32::new(pages_per_article).ok_or(SettingsError::ZeroPagesPerArticle)?;
        Ok(Self {
            leading_pages,
            pages_per_article,
        })
    }

    /// Pages of front matter before the first day's article.
    #[must_use]
    pub const fn leading_pages(&self) -> u32 {
        self.leading_pages
    }

    #[must_use]
    pub const fn pages_per_article(&self) -> u32 {
        self.pages_per_article.get()
    }
}

impl Default for DailyArticleLayout {
    fn default() -> Self {
        Self {
            leading_pages: 0,
            pages_per_article: Self::DEFAULT_PAGES_PER_ARTICLE,
        }
    }
}
