//! Core domain types for Rhapsody entitlements.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Snapshots arrive from the session and catalog collaborators already resolved;
//! everything here is a plain value that can be evaluated from any layer.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod content;
mod decision;
mod settings;
mod user;

pub use content::Content;
pub use decision::{AccessDecision, AccessMessage, AccessReason, ActionRequired};
pub use settings::{DEFAULT_TRIAL_LAST_DAY, DailyArticleLayout, SettingsError, TrialWindow};
pub use user::{LanguageCode, PlanCategory, Subscription, SubscriptionStatus, User};
