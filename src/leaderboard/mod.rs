//! Leaderboard module
//!
//! Provides point rankings and per-member badge highlights.

pub mod rankings;

// Re-export commonly used types
pub use rankings::{build_leaderboard, rank_by_points, top_badges, LeaderboardEntry, Member};
