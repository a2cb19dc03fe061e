//! Coach prompts and payload validation.
//!
//! Generated output is untrusted: a plan must be a JSON object with exactly
//! five well-formed exercises or it is rejected as a parse error.

use serde::Deserialize;

use super::personas::persona_or_default;
use super::types::{AvatarSuggestion, AvatarTraits, CoachError, CoachProfile, PlannedExercise};

/// Exercises in a generated plan.
pub const PLAN_LENGTH: usize = 5;

/// Progress above which the user is described as advanced.
const ADVANCED_PROGRESS: u8 = 50;

/// Prompt asking for a one-day plan.
pub fn build_plan_prompt(profile: &CoachProfile) -> String {
    let persona = persona_or_default(&profile.trainer_id);
    let level = if profile.progress > ADVANCED_PROGRESS {
        "Advanced"
    } else {
        "Intermediate"
    };

    format!(
        "{modifier}\n\n\
         A user with the following profile needs a new, challenging, one-day workout plan.\n\
         - Goal: {goal}\n\
         - Gender: {gender}\n\
         - Experience Level (based on progress): {level}\n\
         - Current Weight: {weight} kg\n\n\
         Generate a list of {count} exercises tailored to their goal. \
         Respond with a JSON object {{\"workouts\": [{{\"name\": string, \"sets\": integer, \"reps\": string}}]}}.",
        modifier = persona.prompt_modifier,
        goal = profile.goal,
        gender = profile.gender.as_str(),
        weight = profile.current_weight_kg,
        count = PLAN_LENGTH,
    )
}

/// Prompt asking for avatar traits from a photo.
pub const AVATAR_PROMPT: &str = "Analyze this image of a person and extract physical traits to generate a pixel art avatar.\n\
Return a JSON object with the following properties:\n\
- gender: 'Male', 'Female', or 'Other'\n\
- hairColor: hex code (e.g., #000000)\n\
- skinColor: hex code (e.g., #f5d0b0)\n\
- hasGlasses: boolean\n\
- hasBeard: boolean\n\
- hairStyle: 'short', 'long', 'bald', 'curly'\n\n\
Be creative but accurate to the image.";

#[derive(Debug, Deserialize)]
struct PlanPayload {
    workouts: Vec<RawExercise>,
}

#[derive(Debug, Deserialize)]
struct RawExercise {
    name: String,
    sets: u32,
    reps: String,
}

/// Validate a generated plan payload.
pub fn parse_plan(payload: &str) -> Result<Vec<PlannedExercise>, CoachError> {
    let plan: PlanPayload = serde_json::from_str(payload.trim())?;

    if plan.workouts.len() != PLAN_LENGTH {
        return Err(CoachError::Parse(format!(
            "expected {} exercises, got {}",
            PLAN_LENGTH,
            plan.workouts.len()
        )));
    }

    plan.workouts
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            if raw.name.trim().is_empty() {
                return Err(CoachError::Parse(format!("exercise {index} has no name")));
            }
            if raw.sets == 0 {
                return Err(CoachError::Parse(format!("exercise {index} has zero sets")));
            }
            if raw.reps.trim().is_empty() {
                return Err(CoachError::Parse(format!("exercise {index} has no reps")));
            }
            Ok(PlannedExercise {
                name: raw.name.trim().to_string(),
                sets: raw.sets,
                reps: raw.reps.trim().to_string(),
            })
        })
        .collect()
}

/// Validate an avatar traits payload and derive the avatar seed.
pub fn parse_avatar_suggestion(payload: &str) -> Result<AvatarSuggestion, CoachError> {
    let traits: AvatarTraits = serde_json::from_str(payload.trim())?;
    Ok(AvatarSuggestion::from_traits(traits))
}

/// Strip a `data:<mime>;base64,` header from an uploaded photo.
pub fn strip_data_url(photo: &str) -> &str {
    photo.split_once(',').map_or(photo, |(_, data)| data)
}
