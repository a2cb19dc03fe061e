//! Badge rule table and evaluation.
//!
//! Each rule reads the state only. Adding a badge means adding a row.

use crate::progression::types::{Goal, UserProgressionState};

use super::catalog::BadgeId;

/// Predicate over a progression state.
pub type BadgePredicate = fn(&UserProgressionState) -> bool;

/// One row of the rule table.
#[derive(Clone, Copy)]
pub struct BadgeRule {
    pub badge: BadgeId,
    pub predicate: BadgePredicate,
}

impl std::fmt::Debug for BadgeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeRule").field("badge", &self.badge).finish()
    }
}

/// Rules in catalog scan order.
pub static BADGE_RULES: [BadgeRule; 16] = [
    BadgeRule {
        badge: BadgeId::RisingStar,
        predicate: |s| s.points >= 1000,
    },
    BadgeRule {
        badge: BadgeId::ConsistencyKing,
        predicate: |s| s.streak >= 7,
    },
    BadgeRule {
        badge: BadgeId::IronGiant,
        predicate: |s| s.workouts_completed >= 100 && s.goal == Goal::BuildMuscle,
    },
    BadgeRule {
        badge: BadgeId::CardioKing,
        predicate: |s| s.workouts_completed >= 100 && s.goal == Goal::LoseWeight,
    },
    BadgeRule {
        badge: BadgeId::CenturyClub,
        predicate: |s| s.workouts_completed >= 100,
    },
    BadgeRule {
        badge: BadgeId::MonthlyMaster,
        predicate: |s| s.workouts_completed >= 30,
    },
    BadgeRule {
        badge: BadgeId::Marathoner,
        predicate: |s| s.workouts_completed >= 50 && s.goal == Goal::LoseWeight,
    },
    BadgeRule {
        badge: BadgeId::PerfectWeek,
        predicate: |s| s.streak >= 7,
    },
    BadgeRule {
        badge: BadgeId::PhoenixFire,
        predicate: |s| s.streak >= 30,
    },
    BadgeRule {
        badge: BadgeId::AiEnthusiast,
        predicate: |s| s.workouts_completed >= 5,
    },
    BadgeRule {
        badge: BadgeId::WeekendWarrior,
        predicate: |s| s.workouts_completed >= 10,
    },
    BadgeRule {
        badge: BadgeId::JackOfAllTrades,
        predicate: |s| s.workouts_completed >= 15,
    },
    BadgeRule {
        badge: BadgeId::StrengthPro,
        predicate: |s| s.workouts_completed >= 25 && s.goal == Goal::BuildMuscle,
    },
    BadgeRule {
        badge: BadgeId::CardioChamp,
        predicate: |s| s.workouts_completed >= 25 && s.goal == Goal::LoseWeight,
    },
    BadgeRule {
        badge: BadgeId::EarlyBird,
        predicate: |s| s.workouts_completed >= 5,
    },
    BadgeRule {
        badge: BadgeId::NightOwl,
        predicate: |s| s.workouts_completed >= 5,
    },
];

/// Badges whose rule holds and that the state does not own yet.
///
/// Returned in rule-table order. Calling again on the same state after
/// merging the result yields nothing.
pub fn evaluate(state: &UserProgressionState) -> Vec<BadgeId> {
    BADGE_RULES
        .iter()
        .filter(|rule| !state.has_badge(rule.badge) && (rule.predicate)(state))
        .map(|rule| rule.badge)
        .collect()
}

/// Look up the rule for a badge.
pub fn rule_for(badge: BadgeId) -> Option<&'static BadgeRule> {
    BADGE_RULES.iter().find(|rule| rule.badge == badge)
}
