//! Core domain logic for Rhapsody.
//!
//! Two entitlement evaluators live side by side:
//!
//! - [`subscription`]: the strict rules. Only an exact `active` status counts
//!   and free plans never unlock gated content.
//! - [`language`]: the trial-aware rules. Honors the promotional free trial
//!   and wildcard language tokens, and returns a full [`AccessDecision`].
//!
//! [`AccessPolicy`] names which of the two a call site uses. [`daily`] maps a
//! calendar day to the pages of that day's article in the monthly edition.
//!
//! Everything here is synchronous and pure; time is always passed in.
//!
//! [`AccessDecision`]: rhapsody_types::AccessDecision

pub mod daily;
pub mod language;
mod policy;
pub mod subscription;

pub use daily::{DailyArticleError, PageRange, checked_page_range, page_range, todays_page_range};
pub use language::{check_language_access, check_user_language_access};
pub use policy::AccessPolicy;
pub use subscription::{
    access_message, filter_accessible_languages, has_language_access, has_subscription_access,
    should_show_upgrade_prompt, user_language_codes,
};
