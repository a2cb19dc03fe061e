//! Avatar evolution.
//!
//! An avatar has a short ladder of images per goal. Progress picks the rung.

use std::collections::HashMap;

use crate::progression::types::Goal;

/// Stages per goal in the built-in catalog.
pub const STAGE_COUNT: usize = 3;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/8.x/pixel-art/svg?seed=";

/// Map a progress percentage to a stage index in `0..stage_count`.
///
/// Progress is clamped to 0..=100 first; NaN counts as 0. Exactly 100 lands
/// on the last stage. A `stage_count` of 0 yields 0.
pub fn stage_index(progress: f64, stage_count: usize) -> usize {
    if stage_count == 0 {
        return 0;
    }

    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    };
    let chunk = 100.0 / stage_count as f64;
    let index = (progress / chunk).floor() as usize;

    index.min(stage_count - 1)
}

/// One selectable avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub id: String,
    pub name: String,
    stages: HashMap<Goal, [String; STAGE_COUNT]>,
}

impl Avatar {
    fn new(id: &str, name: &str, seeds: [(Goal, [&str; STAGE_COUNT]); 3]) -> Self {
        let stages = seeds
            .into_iter()
            .map(|(goal, seeds)| (goal, seeds.map(|seed| format!("{AVATAR_BASE_URL}{seed}"))))
            .collect();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            stages,
        }
    }

    /// Stage images for a goal, earliest first.
    pub fn stages(&self, goal: Goal) -> Option<&[String; STAGE_COUNT]> {
        self.stages.get(&goal)
    }

    /// Image for the goal at the given progress.
    pub fn image(&self, goal: Goal, progress: f64) -> Option<&str> {
        let stages = self.stages(goal)?;
        stages
            .get(stage_index(progress, stages.len()))
            .map(String::as_str)
    }
}

/// Immutable avatar catalog.
#[derive(Debug, Clone)]
pub struct AvatarCatalog {
    avatars: Vec<Avatar>,
}

impl Default for AvatarCatalog {
    fn default() -> Self {
        use Goal::*;
        Self {
            avatars: vec![
                Avatar::new(
                    "cat",
                    "Fitness Cat",
                    [
                        (BuildMuscle, ["cat_start", "cat_mid", "cat_strong"]),
                        (LoseWeight, ["cat_heavy", "cat_mid", "cat_lean"]),
                        (ImproveEndurance, ["cat_slow", "cat_runner", "cat_fast"]),
                    ],
                ),
                Avatar::new(
                    "dog",
                    "Power Pup",
                    [
                        (BuildMuscle, ["dog_start", "dog_mid", "dog_buff"]),
                        (LoseWeight, ["dog_chunky", "dog_active", "dog_fit"]),
                        (ImproveEndurance, ["dog_nap", "dog_jog", "dog_dash"]),
                    ],
                ),
                Avatar::new(
                    "robot",
                    "Gym Bot",
                    [
                        (BuildMuscle, ["bot_v1", "bot_v2", "bot_v3_titan"]),
                        (LoseWeight, ["bot_heavy", "bot_sleek", "bot_nano"]),
                        (ImproveEndurance, ["bot_base", "bot_upgraded", "bot_turbo"]),
                    ],
                ),
                Avatar::new(
                    "pixel",
                    "Pixel Pal",
                    [
                        (BuildMuscle, ["pix_1", "pix_2", "pix_3"]),
                        (LoseWeight, ["pix_4", "pix_5", "pix_6"]),
                        (ImproveEndurance, ["pix_7", "pix_8", "pix_9"]),
                    ],
                ),
            ],
        }
    }
}

impl AvatarCatalog {
    pub fn get(&self, id: &str) -> Option<&Avatar> {
        self.avatars.iter().find(|avatar| avatar.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.avatars.iter().map(|avatar| avatar.id.as_str())
    }

    /// Image for an avatar, goal and progress. `None` for an unknown avatar.
    pub fn stage_image(&self, avatar_id: &str, goal: Goal, progress: f64) -> Option<&str> {
        self.get(avatar_id)?.image(goal, progress)
    }
}
