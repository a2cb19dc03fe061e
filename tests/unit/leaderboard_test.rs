//! Unit tests for leaderboard rankings

use fitverse::badges::{BadgeId, RarityOrder};
use fitverse::leaderboard::build_leaderboard;
use fitverse::{rank_by_points, top_badges, Member, UserProgressionState};

fn member(name: &str, points: u64, achievements: Vec<BadgeId>) -> Member {
    Member::new(
        name.to_string(),
        "pixel".to_string(),
        UserProgressionState {
            points,
            achievements,
            ..Default::default()
        },
    )
}

/// Leaderboard orders by points, highest first
#[test]
fn test_rank_by_points() {
    let members = vec![
        member("Alex Thorne", 4850, vec![]),
        member("Jasmine Lee", 7200, vec![]),
        member("Ken Miles", 6100, vec![]),
    ];
    let names: Vec<&str> = rank_by_points(&members).iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Jasmine Lee", "Ken Miles", "Alex Thorne"]);
}

/// Equal points keep insertion order
#[test]
fn test_rank_ties_insertion_order() {
    let members = vec![
        member("one", 100, vec![]),
        member("two", 100, vec![]),
        member("three", 100, vec![]),
    ];
    let names: Vec<&str> = rank_by_points(&members).iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["one", "two", "three"]);
}

/// Empty input gives an empty board
#[test]
fn test_empty_leaderboard() {
    assert!(rank_by_points(&[]).is_empty());
    assert!(build_leaderboard(&[], &RarityOrder::default(), 3, None).is_empty());
}

/// Top badges pick the rarest three
#[test]
fn test_top_badges_rarest() {
    let achievements = vec![
        BadgeId::RisingStar,
        BadgeId::ConsistencyKing,
        BadgeId::CardioChamp,
        BadgeId::Marathoner,
        BadgeId::MonthlyMaster,
        BadgeId::PerfectWeek,
    ];
    assert_eq!(
        top_badges(&achievements, &RarityOrder::default(), 3),
        vec![BadgeId::MonthlyMaster, BadgeId::Marathoner, BadgeId::PerfectWeek]
    );
}

/// Fewer badges than requested
#[test]
fn test_top_badges_short_list() {
    let achievements = vec![BadgeId::NightOwl];
    assert_eq!(
        top_badges(&achievements, &RarityOrder::default(), 3),
        vec![BadgeId::NightOwl]
    );
}

/// Board rows carry rank and badge highlights
#[test]
fn test_board_rows() {
    let members = vec![
        member("low", 10, vec![BadgeId::EarlyBird]),
        member("high", 20, vec![BadgeId::RisingStar, BadgeId::IronGiant]),
    ];
    let board = build_leaderboard(&members, &RarityOrder::default(), 1, None);
    assert_eq!(board[0].name, "high");
    assert_eq!(board[0].top_badges, vec![BadgeId::IronGiant]);
    assert_eq!(board[1].rank, 2);
    assert_eq!(board[1].top_badges, vec![BadgeId::EarlyBird]);
}
