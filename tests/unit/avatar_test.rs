//! Unit tests for avatar stage resolution

use fitverse::avatar::STAGE_COUNT;
use fitverse::{stage_index, AvatarCatalog, Goal};

/// Stage index stays in range and never decreases with progress
#[test]
fn test_stage_index_monotonic_in_range() {
    for stages in 1..=10usize {
        let mut previous = 0;
        let mut p = 0.0;
        while p <= 100.0 {
            let index = stage_index(p, stages);
            assert!(index <= stages - 1, "progress {p} stages {stages}");
            assert!(index >= previous, "progress {p} stages {stages}");
            previous = index;
            p += 0.25;
        }
    }
}

/// Exactly 100 reaches the top stage
#[test]
fn test_full_progress_top_stage() {
    for stages in 1..=10usize {
        assert_eq!(stage_index(100.0, stages), stages - 1);
    }
}

/// Catalog follows the user's progress through the three stages
#[test]
fn test_avatar_evolves_with_progress() {
    let catalog = AvatarCatalog::default();
    let stages: Vec<&str> = [0.0, 50.0, 100.0]
        .iter()
        .map(|p| catalog.stage_image("dog", Goal::ImproveEndurance, *p).unwrap())
        .collect();

    assert_eq!(stages.len(), STAGE_COUNT);
    assert!(stages[0].ends_with("dog_nap"));
    assert!(stages[1].ends_with("dog_jog"));
    assert!(stages[2].ends_with("dog_dash"));
}
