//! Leaderboard rankings.
//!
//! Orders members by points and picks each member's rarest badges for display.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::badges::{BadgeId, RarityOrder};
use crate::progression::types::{ProgressionError, UserProgressionState};

/// Badges shown next to a leaderboard name.
pub const DEFAULT_TOP_BADGES: usize = 3;

/// A gym member as shown on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub avatar_id: String,
    /// Badge pinned next to the avatar
    #[serde(default)]
    pub signature_badge: Option<BadgeId>,
    pub state: UserProgressionState,
}

impl Member {
    pub fn new(name: String, avatar_id: String, state: UserProgressionState) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            avatar_id,
            signature_badge: None,
            state,
        }
    }

    /// Pin an owned badge, or clear the pin with `None`.
    pub fn set_signature_badge(&mut self, badge: Option<BadgeId>) -> Result<(), ProgressionError> {
        if let Some(badge) = badge {
            if !self.state.has_badge(badge) {
                return Err(ProgressionError::Validation(format!(
                    "Cannot pin {badge}: badge not unlocked"
                )));
            }
        }
        self.signature_badge = badge;
        Ok(())
    }
}

/// Leaderboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: u32,
    pub user_id: Uuid,
    pub name: String,
    pub points: u64,
    pub top_badges: Vec<BadgeId>,
    pub is_current_user: bool,
}

/// Members ordered by points, highest first.
///
/// The sort is stable: members with equal points keep their input order.
pub fn rank_by_points(members: &[Member]) -> Vec<&Member> {
    let mut ranked: Vec<&Member> = members.iter().collect();
    ranked.sort_by(|a, b| b.state.points.cmp(&a.state.points));
    ranked
}

/// The `n` rarest badges, rarest first.
///
/// Unranked badges come after ranked ones; ties keep achievement order.
pub fn top_badges(achievements: &[BadgeId], rarity: &RarityOrder, n: usize) -> Vec<BadgeId> {
    let mut sorted = achievements.to_vec();
    sorted.sort_by_key(|badge| rarity.rank(*badge));
    sorted.truncate(n);
    sorted
}

/// Build leaderboard rows for display.
pub fn build_leaderboard(
    members: &[Member],
    rarity: &RarityOrder,
    badge_count: usize,
    current_user: Option<Uuid>,
) -> Vec<LeaderboardEntry> {
    rank_by_points(members)
        .into_iter()
        .enumerate()
        .map(|(index, member)| LeaderboardEntry {
            rank: index as u32 + 1,
            user_id: member.id,
            name: member.name.clone(),
            points: member.state.points,
            top_badges: top_badges(&member.state.achievements, rarity, badge_count),
            is_current_user: current_user == Some(member.id),
        })
        .collect()
}
