//! AI coach collaborator.
//!
//! Builds prompts for a generative model, calls it, and validates what comes
//! back. Results only ever reach the engine as ordinary input (an exercise
//! list), and failures leave progression state untouched.

pub mod client;
pub mod personas;
pub mod prompt;
pub mod types;

// Re-exports for convenience
pub use client::CoachClient;
pub use personas::{persona_or_default, TrainerPersona, TRAINER_PERSONAS};
pub use prompt::{build_plan_prompt, parse_avatar_suggestion, parse_plan, PLAN_LENGTH};
pub use types::{AvatarSuggestion, AvatarTraits, CoachError, CoachProfile, Gender, PlannedExercise};
