//! Integration tests for state and member files

use chrono::NaiveDateTime;
use fitverse::badges::BadgeId;
use fitverse::storage::{load_members, load_state, save_members, save_state, StorageError};
use fitverse::{Goal, Member, ProgressionError, ProgressionUpdater, UserProgressionState};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

/// Completing a session and saving preserves everything on reload
#[test]
fn test_state_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let state = UserProgressionState {
        points: 995,
        ..UserProgressionState::new(Goal::LoseWeight, 2).unwrap()
    };
    let outcome = ProgressionUpdater::default()
        .complete_session(&state, 2, at("2024-01-09T09:00"))
        .unwrap();
    save_state(&path, &outcome.state).unwrap();

    let loaded = load_state(&path).unwrap();
    assert_eq!(loaded, outcome.state);
    assert_eq!(loaded.achievements, vec![BadgeId::RisingStar]);
}

/// Hand-written JSON in the documented shape loads
#[test]
fn test_load_documented_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(
        &path,
        r#"{
            "points": 4850,
            "streak": 12,
            "workoutsCompleted": 35,
            "bmi": 24.5,
            "progress": 45,
            "weeklyGoal": 3,
            "goal": "Build Muscle",
            "achievements": ["Rising Star", "Consistency King", "AI Enthusiast"],
            "activityLog": ["2024-01-01T08:00:00", "2024-01-02T08:00:00"]
        }"#,
    )
    .unwrap();

    let state = load_state(&path).unwrap();
    assert_eq!(state.points, 4850);
    assert_eq!(state.achievements.len(), 3);
    assert_eq!(state.activity_log[0], at("2024-01-01T08:00"));
}

/// Unknown badge names are rejected
#[test]
fn test_unknown_badge_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(
        &path,
        r#"{"points": 0, "streak": 0, "workoutsCompleted": 0, "bmi": 0.0, "progress": 0,
            "weeklyGoal": 1, "achievements": ["Moon Walker"], "activityLog": []}"#,
    )
    .unwrap();

    assert!(matches!(load_state(&path), Err(StorageError::ParseError(_))));
}

fn write_state(dir: &tempfile::TempDir, progress: u32, weekly_goal: u32, achievements: &str) -> std::path::PathBuf {
    let path = dir.path().join("state.json");
    std::fs::write(
        &path,
        format!(
            r#"{{"points": 1200, "streak": 0, "workoutsCompleted": 4, "bmi": 22.0,
                "progress": {progress}, "weeklyGoal": {weekly_goal},
                "achievements": {achievements}, "activityLog": []}}"#
        ),
    )
    .unwrap();
    path
}

fn assert_invalid(result: Result<UserProgressionState, StorageError>) {
    assert!(
        matches!(
            result,
            Err(StorageError::InvalidState(ProgressionError::Validation(_)))
        ),
        "{result:?}"
    );
}

/// Progress above 100 is rejected
#[test]
fn test_progress_out_of_range_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert_invalid(load_state(&write_state(&dir, 101, 3, "[]")));
    assert!(load_state(&write_state(&dir, 100, 3, "[]")).is_ok());
}

/// A weekly goal of zero is rejected
#[test]
fn test_zero_weekly_goal_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert_invalid(load_state(&write_state(&dir, 10, 0, "[]")));
}

/// Repeated badges are rejected
#[test]
fn test_duplicate_achievements_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_state(&dir, 10, 3, r#"["Rising Star", "Early Bird", "Rising Star"]"#);
    assert_invalid(load_state(&path));
}

/// Member files are checked member by member
#[test]
fn test_members_with_invalid_state_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gym.json");

    let good = Member::new("Alex".to_string(), "cat".to_string(), UserProgressionState::default());
    let bad = Member::new(
        "Jasmine".to_string(),
        "dog".to_string(),
        UserProgressionState {
            achievements: vec![BadgeId::RisingStar, BadgeId::RisingStar],
            ..Default::default()
        },
    );
    save_members(&path, &[good, bad]).unwrap();

    assert!(matches!(
        load_members(&path),
        Err(StorageError::InvalidState(ProgressionError::Validation(_)))
    ));
}

/// Missing file surfaces an IO error
#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_state(&dir.path().join("nope.json")),
        Err(StorageError::IoError(_))
    ));
}

/// Member lists round trip
#[test]
fn test_members_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members").join("gym.json");

    let mut member = Member::new(
        "Ken Miles".to_string(),
        "robot".to_string(),
        UserProgressionState {
            achievements: vec![BadgeId::WeekendWarrior],
            ..Default::default()
        },
    );
    member.set_signature_badge(Some(BadgeId::WeekendWarrior)).unwrap();
    save_members(&path, &[member.clone()]).unwrap();

    let loaded = load_members(&path).unwrap();
    assert_eq!(loaded, vec![member]);
}
