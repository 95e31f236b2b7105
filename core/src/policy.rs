use chrono::{DateTime, Utc};
use rhapsody_config::RhapsodyConfig;
use rhapsody_types::{Content, TrialWindow, User};

use crate::{language, subscription};

/// Which entitlement rules a call site applies.
///
/// The strict and trial-aware evaluators disagree on trials, wildcards and
/// free plans. Naming the choice keeps a screen from mixing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// [`subscription::has_language_access`].
    Strict,
    /// [`language::check_user_language_access`] with the given trial window.
    TrialAware(TrialWindow),
}

impl AccessPolicy {
    #[must_use]
    pub fn from_config(config: &RhapsodyConfig) -> Self {
        AccessPolicy::TrialAware(config.trial())
    }

    #[must_use]
    pub fn grants(&self, user: Option<&User>, content: &Content, now: DateTime<Utc>) -> bool {
        match self {
            AccessPolicy::Strict => subscription::has_language_access(user, content),
            AccessPolicy::TrialAware(trial) => {
                language::check_user_language_access(user, content, trial, now).has_access()
            }
        }
    }

    /// Entries of `languages` granted under this policy, in input order.
    #[must_use]
    pub fn filter<'a>(
        &self,
        user: Option<&User>,
        languages: &'a [Content],
        now: DateTime<Utc>,
    ) -> Vec<&'a Content> {
        languages
            .iter()
            .filter(|content| self.grants(user, content, now))
            .collect()
    }
}
