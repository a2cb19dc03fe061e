//! Shared coach types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progression::types::Goal;

/// Error types for coach operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoachError {
    /// Upstream unreachable, unauthorized, or failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// Payload did not match the required shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CoachError {
    fn from(err: serde_json::Error) -> Self {
        CoachError::Parse(err.to_string())
    }
}

/// Gender as given in the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Profile fields the coach prompt is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachProfile {
    pub goal: Goal,
    pub gender: Gender,
    /// Progress percentage, 0..=100
    pub progress: u8,
    pub current_weight_kg: f64,
    /// Selected trainer persona id
    pub trainer_id: String,
}

/// One exercise in a generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub name: String,
    pub sets: u32,
    /// Repetitions or duration, e.g. "10-12" or "60s"
    pub reps: String,
}

/// Physical traits extracted from a profile photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarTraits {
    pub gender: String,
    pub hair_color: String,
    pub skin_color: String,
    pub has_glasses: bool,
    pub has_beard: bool,
    pub hair_style: String,
}

/// Suggested avatar seed with the traits it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarSuggestion {
    pub avatar_id: String,
    pub traits: AvatarTraits,
}

impl AvatarSuggestion {
    /// Derive the seed `"{gender}-{hairStyle}-{hairColor}-{glasses}"`.
    pub fn from_traits(traits: AvatarTraits) -> Self {
        let glasses = if traits.has_glasses { "glasses" } else { "" };
        let avatar_id = format!(
            "{}-{}-{}-{}",
            traits.gender, traits.hair_style, traits.hair_color, glasses
        );
        Self { avatar_id, traits }
    }
}
