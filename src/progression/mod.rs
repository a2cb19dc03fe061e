//! Progression engine.
//!
//! Turns completed workout sessions into points, progress, a smart weekly
//! streak and badge unlocks.

pub mod checklist;
pub mod clock;
pub mod registry;
pub mod streak;
pub mod types;
pub mod updater;
pub mod week;

// Re-export commonly used types
pub use checklist::{WorkoutChecklist, WorkoutItem};
pub use clock::{parse_timestamp, parse_timestamp_in};
pub use registry::{ProgressionEvent, ProgressionRegistry};
pub use streak::compute_streak;
pub use types::*;
pub use updater::ProgressionUpdater;
pub use week::{week_key, WeekKey};
