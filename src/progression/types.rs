//! Core progression types.
//!
//! Defines the user's goal, the progression state the engine derives from
//! the activity log, session events, and progression errors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::badges::BadgeId;

/// Training goal selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Goal {
    /// Strength focus
    #[default]
    #[serde(rename = "Build Muscle")]
    BuildMuscle,
    /// Weight loss focus
    #[serde(rename = "Lose Weight")]
    LoseWeight,
    /// Stamina focus
    #[serde(rename = "Improve Endurance")]
    ImproveEndurance,
}

impl Goal {
    /// All goals in display order.
    pub const ALL: [Goal; 3] = [Goal::BuildMuscle, Goal::LoseWeight, Goal::ImproveEndurance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::BuildMuscle => "Build Muscle",
            Goal::LoseWeight => "Lose Weight",
            Goal::ImproveEndurance => "Improve Endurance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Build Muscle" => Some(Goal::BuildMuscle),
            "Lose Weight" => Some(Goal::LoseWeight),
            "Improve Endurance" => Some(Goal::ImproveEndurance),
            _ => None,
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived progression state for one user.
///
/// `achievements` only ever grows and keeps insertion order. `streak` is
/// always the result of the last recomputation over `activity_log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgressionState {
    pub points: u64,
    pub streak: u32,
    pub workouts_completed: u32,
    /// Percentage in 0..=100
    pub progress: u8,
    pub bmi: f64,
    /// Sessions per week needed to keep the streak
    pub weekly_goal: u32,
    #[serde(default)]
    pub goal: Goal,
    pub achievements: Vec<BadgeId>,
    /// Session completion times on the collaborator's wall clock
    pub activity_log: Vec<NaiveDateTime>,
}

impl Default for UserProgressionState {
    fn default() -> Self {
        Self {
            points: 0,
            streak: 0,
            workouts_completed: 0,
            progress: 0,
            bmi: 0.0,
            weekly_goal: 3,
            goal: Goal::default(),
            achievements: Vec::new(),
            activity_log: Vec::new(),
        }
    }
}

impl UserProgressionState {
    /// Create a zeroed state for a new account.
    pub fn new(goal: Goal, weekly_goal: u32) -> Result<Self, ProgressionError> {
        Self::validate_weekly_goal(weekly_goal)?;
        Ok(Self {
            goal,
            weekly_goal,
            ..Default::default()
        })
    }

    /// Change the weekly session goal.
    pub fn set_weekly_goal(&mut self, weekly_goal: u32) -> Result<(), ProgressionError> {
        Self::validate_weekly_goal(weekly_goal)?;
        self.weekly_goal = weekly_goal;
        Ok(())
    }

    /// Weekly goal must be at least one session.
    pub fn validate_weekly_goal(weekly_goal: u32) -> Result<(), ProgressionError> {
        if weekly_goal == 0 {
            return Err(ProgressionError::Validation(
                "Weekly goal must be at least 1 session".to_string(),
            ));
        }
        Ok(())
    }

    /// Check the invariants a stored state must hold: progress within
    /// 0..=100, a weekly goal of at least one, and no repeated badges.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.progress > 100 {
            return Err(ProgressionError::Validation(format!(
                "Progress {} is above 100",
                self.progress
            )));
        }
        Self::validate_weekly_goal(self.weekly_goal)?;
        for (i, badge) in self.achievements.iter().enumerate() {
            if self.achievements[..i].contains(badge) {
                return Err(ProgressionError::Validation(format!(
                    "Badge {badge} is listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Whether the badge is already owned.
    pub fn has_badge(&self, badge: BadgeId) -> bool {
        self.achievements.contains(&badge)
    }
}

/// Session completion event handed to the engine by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvent {
    pub user_id: Uuid,
    pub exercises_completed_count: u32,
    /// Wall clock time of completion; absent or malformed is a clock error
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Result of applying one completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    /// Fully updated state
    pub state: UserProgressionState,
    /// Badges unlocked by this session, in catalog order
    pub unlocked: Vec<BadgeId>,
}

impl SessionOutcome {
    /// Whether the caller should surface a celebration.
    pub fn has_unlocks(&self) -> bool {
        !self.unlocked.is_empty()
    }
}

/// Progression errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgressionError {
    /// Rejected input, nothing was mutated
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or malformed "now"
    #[error("Clock input error: {0}")]
    ClockInput(String),

    /// No state registered for the user
    #[error("Unknown user: {0}")]
    UnknownUser(Uuid),
}
