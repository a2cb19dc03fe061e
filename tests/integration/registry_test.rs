//! Integration tests for the multi-user registry

use std::sync::Arc;
use std::thread;

use fitverse::badges::BadgeId;
use fitverse::leaderboard::build_leaderboard;
use fitverse::progression::ProgressionEvent;
use fitverse::{
    Goal, Member, ProgressionError, ProgressionRegistry, RarityOrder, SessionEvent,
    UserProgressionState,
};
use uuid::Uuid;

fn event(user_id: Uuid, count: u32, day: u32) -> SessionEvent {
    SessionEvent {
        user_id,
        exercises_completed_count: count,
        timestamp: Some(format!("2024-03-{:02}T07:30:00", day)),
    }
}

/// Concurrent completions for one user are never lost
#[test]
fn test_same_user_updates_serialized() {
    let registry = Arc::new(ProgressionRegistry::default());
    let user = Uuid::new_v4();
    registry.register(user, UserProgressionState::new(Goal::BuildMuscle, 3).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..25 {
                    let day = 1 + (worker * 25 + i) % 28;
                    registry.apply(&event(user, 1, day)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = registry.snapshot(user).unwrap();
    assert_eq!(state.workouts_completed, 200);
    assert_eq!(state.points, 200 * 50);
    assert_eq!(state.activity_log.len(), 200);
    assert_eq!(state.progress, 100);
    assert!(state.has_badge(BadgeId::CenturyClub));
    assert!(state.has_badge(BadgeId::IronGiant));
}

/// Different users progress independently
#[test]
fn test_users_independent() {
    let registry = Arc::new(ProgressionRegistry::default());
    let users: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
    for user in &users {
        registry.register(*user, UserProgressionState::default());
    }

    let handles: Vec<_> = users
        .iter()
        .enumerate()
        .map(|(n, user)| {
            let registry = Arc::clone(&registry);
            let user = *user;
            thread::spawn(move || {
                for day in 1..=(n as u32 + 1) {
                    registry.apply(&event(user, 2, day)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for (n, user) in users.iter().enumerate() {
        let state = registry.snapshot(*user).unwrap();
        assert_eq!(state.workouts_completed, 2 * (n as u32 + 1));
    }
    assert_eq!(registry.snapshots().len(), 4);
}

/// Failed events leave stored state untouched
#[test]
fn test_rejected_events_do_not_mutate() {
    let registry = ProgressionRegistry::default();
    let user = Uuid::new_v4();
    let initial = UserProgressionState {
        points: 40,
        ..Default::default()
    };
    registry.register(user, initial.clone());

    let zero = registry.apply(&event(user, 0, 3)).unwrap_err();
    assert!(matches!(zero, ProgressionError::Validation(_)));

    let bad_clock = SessionEvent {
        user_id: user,
        exercises_completed_count: 2,
        timestamp: Some("next tuesday".to_string()),
    };
    let err = registry.apply(&bad_clock).unwrap_err();
    assert!(matches!(err, ProgressionError::ClockInput(_)));

    assert_eq!(registry.snapshot(user).unwrap(), initial);
}

/// Subscribers hear about unlocks
#[test]
fn test_unlock_notifications() {
    let registry = ProgressionRegistry::default();
    let mut rx = registry.subscribe();
    let user = Uuid::new_v4();
    registry.register(
        user,
        UserProgressionState {
            workouts_completed: 4,
            ..Default::default()
        },
    );

    registry.apply(&event(user, 1, 4)).unwrap();

    let mut unlocked = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let ProgressionEvent::BadgesUnlocked { badges, .. } = event {
            unlocked.extend(badges);
        }
    }
    assert_eq!(unlocked, vec![BadgeId::AiEnthusiast, BadgeId::EarlyBird, BadgeId::NightOwl]);
}

/// Session events deserialize from the collaborator's JSON
#[test]
fn test_event_json_and_leaderboard() {
    let registry = ProgressionRegistry::default();
    let alex = Uuid::new_v4();
    let jasmine = Uuid::new_v4();
    registry.register(alex, UserProgressionState::default());
    registry.register(jasmine, UserProgressionState::default());

    let json = format!(
        r#"{{"userId": "{jasmine}", "exercisesCompletedCount": 4, "timestamp": "2024-03-05T06:45:00"}}"#
    );
    let parsed: SessionEvent = serde_json::from_str(&json).unwrap();
    registry.apply(&parsed).unwrap();
    registry.apply(&event(alex, 1, 5)).unwrap();

    let members: Vec<Member> = [("Alex", alex), ("Jasmine", jasmine)]
        .iter()
        .map(|(name, id)| {
            let mut member = Member::new(
                name.to_string(),
                "cat".to_string(),
                registry.snapshot(*id).unwrap(),
            );
            member.id = *id;
            member
        })
        .collect();

    let board = build_leaderboard(&members, &RarityOrder::default(), 3, Some(alex));
    assert_eq!(board[0].name, "Jasmine");
    assert_eq!(board[0].points, 200);
    assert!(board[1].is_current_user);
}
