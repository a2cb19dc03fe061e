//! Fitverse - Workout Gamification Engine
//!
//! Converts a user's workout completion history into progression state: a
//! smart weekly streak with a grace period for the current week, points and
//! progress, rule-based achievement badges, avatar evolution stages, and
//! leaderboard rankings.

pub mod avatar;
pub mod badges;
pub mod coach;
pub mod leaderboard;
pub mod progression;
pub mod storage;

// Re-export commonly used types
pub use avatar::{stage_index, AvatarCatalog};
pub use badges::{BadgeId, RarityOrder};
pub use leaderboard::{rank_by_points, top_badges, Member};
pub use progression::{
    compute_streak, week_key, Goal, ProgressionError, ProgressionRegistry, ProgressionUpdater,
    SessionEvent, SessionOutcome, UserProgressionState,
};
pub use storage::config::EngineConfig;
