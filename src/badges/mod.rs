//! Achievement badges.
//!
//! Provides the fixed badge catalog, rarity ordering, and the rule engine that
//! decides which badges a progression state newly qualifies for.

pub mod catalog;
pub mod rules;

// Re-export commonly used types
pub use catalog::{BadgeId, RarityOrder, RarityTier, BADGE_ORDER};
pub use rules::{evaluate, BadgeRule, BADGE_RULES};
