//! Unit tests for the badge rule engine

use fitverse::badges::{evaluate, BadgeId, BADGE_RULES};
use fitverse::{Goal, UserProgressionState};

fn state(goal: Goal, workouts: u32, streak: u32, points: u64) -> UserProgressionState {
    UserProgressionState {
        goal,
        workouts_completed: workouts,
        streak,
        points,
        ..Default::default()
    }
}

fn merge(state: &mut UserProgressionState, unlocked: &[BadgeId]) {
    state.achievements.extend_from_slice(unlocked);
}

/// Catalog holds sixteen distinct badges
#[test]
fn test_catalog_size() {
    assert_eq!(BADGE_RULES.len(), 16);
    assert_eq!(BadgeId::ALL.len(), 16);
}

/// Exact display spellings
#[test]
fn test_badge_names() {
    let names: Vec<&str> = BADGE_RULES.iter().map(|r| r.badge.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Rising Star",
            "Consistency King",
            "Iron Giant",
            "Cardio King",
            "Century Club",
            "Monthly Master",
            "Marathoner",
            "Perfect Week",
            "Phoenix Fire",
            "AI Enthusiast",
            "Weekend Warrior",
            "Jack of All Trades",
            "Strength Pro",
            "Cardio Champ",
            "Early Bird",
            "Night Owl",
        ]
    );
}

/// Thresholds are inclusive
#[test]
fn test_thresholds_inclusive() {
    assert!(!evaluate(&state(Goal::BuildMuscle, 0, 0, 999)).contains(&BadgeId::RisingStar));
    assert!(evaluate(&state(Goal::BuildMuscle, 0, 0, 1000)).contains(&BadgeId::RisingStar));

    assert!(!evaluate(&state(Goal::BuildMuscle, 29, 0, 0)).contains(&BadgeId::MonthlyMaster));
    assert!(evaluate(&state(Goal::BuildMuscle, 30, 0, 0)).contains(&BadgeId::MonthlyMaster));

    assert!(!evaluate(&state(Goal::LoseWeight, 49, 0, 0)).contains(&BadgeId::Marathoner));
    assert!(evaluate(&state(Goal::LoseWeight, 50, 0, 0)).contains(&BadgeId::Marathoner));

    assert!(!evaluate(&state(Goal::BuildMuscle, 0, 29, 0)).contains(&BadgeId::PhoenixFire));
    assert!(evaluate(&state(Goal::BuildMuscle, 0, 30, 0)).contains(&BadgeId::PhoenixFire));
}

/// Second evaluation after merging returns nothing
#[test]
fn test_idempotent_evaluation() {
    for goal in Goal::ALL {
        for workouts in [0, 5, 10, 15, 25, 30, 50, 100] {
            for streak in [0, 7, 30] {
                let mut s = state(goal, workouts, streak, 1500);
                let first = evaluate(&s);
                merge(&mut s, &first);
                assert!(evaluate(&s).is_empty());
            }
        }
    }
}

/// Rules depend only on state, not on each other
#[test]
fn test_order_independent() {
    let s = state(Goal::LoseWeight, 100, 30, 5000);
    let all = evaluate(&s);

    // Owning any subset removes exactly that subset from the result
    for owned in &all {
        let mut partial = s.clone();
        partial.achievements.push(*owned);
        let rest = evaluate(&partial);
        let expected: Vec<BadgeId> = all.iter().copied().filter(|b| b != owned).collect();
        assert_eq!(rest, expected);
    }
}

/// Everything a maxed-out weight-loss user can earn
#[test]
fn test_lose_weight_full_set() {
    let unlocked = evaluate(&state(Goal::LoseWeight, 100, 30, 5000));
    assert_eq!(unlocked.len(), 14);
    assert!(!unlocked.contains(&BadgeId::IronGiant));
    assert!(!unlocked.contains(&BadgeId::StrengthPro));
}
