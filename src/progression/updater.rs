//! Session completion.
//!
//! Applies one completed workout session to a progression state: points,
//! progress, activity log, workout count, streak, and badge unlocks. The new
//! state is built on a copy and only returned whole.

use chrono::NaiveDateTime;

use super::streak::compute_streak;
use super::types::{ProgressionError, SessionOutcome, UserProgressionState};
use crate::badges;
use crate::storage::config::ScoringSettings;

/// Upper bound of the progress percentage.
pub const MAX_PROGRESS: u8 = 100;

/// Applies completed sessions to progression states.
#[derive(Debug, Clone, Default)]
pub struct ProgressionUpdater {
    scoring: ScoringSettings,
}

impl ProgressionUpdater {
    /// Create an updater with custom scoring.
    pub fn new(scoring: ScoringSettings) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringSettings {
        &self.scoring
    }

    /// Apply a completed session with `exercises_completed` checked-off exercises.
    ///
    /// Fails without touching `state` when no exercise was completed.
    pub fn complete_session(
        &self,
        state: &UserProgressionState,
        exercises_completed: u32,
        now: NaiveDateTime,
    ) -> Result<SessionOutcome, ProgressionError> {
        if exercises_completed == 0 {
            tracing::warn!("Rejected session with no completed exercises");
            return Err(ProgressionError::Validation(
                "Please complete at least one exercise".to_string(),
            ));
        }
        UserProgressionState::validate_weekly_goal(state.weekly_goal)?;

        let mut next = state.clone();
        let count = u64::from(exercises_completed);

        next.points = next
            .points
            .saturating_add(count.saturating_mul(self.scoring.points_per_exercise));

        let gained = count.saturating_mul(u64::from(self.scoring.progress_per_exercise));
        next.progress = (u64::from(next.progress) + gained).min(u64::from(MAX_PROGRESS)) as u8;

        next.activity_log.push(now);
        next.workouts_completed = next.workouts_completed.saturating_add(exercises_completed);
        next.streak = compute_streak(&next.activity_log, next.weekly_goal, now);

        let unlocked = badges::evaluate(&next);
        next.achievements.extend(unlocked.iter().copied());

        tracing::info!(
            exercises = exercises_completed,
            points = next.points,
            streak = next.streak,
            progress = next.progress,
            "Session completed"
        );
        for badge in &unlocked {
            tracing::info!(badge = %badge, "Badge unlocked");
        }

        Ok(SessionOutcome {
            state: next,
            unlocked,
        })
    }
}
