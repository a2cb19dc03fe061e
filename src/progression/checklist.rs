//! Workout checklist for a session.
//!
//! The user checks off exercises; the number checked off is what a completed
//! session reports to the updater.

use serde::{Deserialize, Serialize};

use super::types::Goal;
use crate::coach::PlannedExercise;

/// Exercise row in the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutItem {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Repetitions or duration, e.g. "10-12" or "60s"
    pub reps: String,
    pub completed: bool,
}

impl WorkoutItem {
    fn new(id: &str, name: &str, sets: u32, reps: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            completed: false,
        }
    }
}

/// Exercises for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutChecklist {
    items: Vec<WorkoutItem>,
}

impl WorkoutChecklist {
    pub fn new(items: Vec<WorkoutItem>) -> Self {
        Self { items }
    }

    /// Built-in plan for a goal.
    pub fn for_goal(goal: Goal) -> Self {
        Self::new(default_plan(goal))
    }

    /// Replace the list with a generated plan. Ids are `ai-{batch}-{index}`.
    pub fn from_plan(batch: &str, plan: &[PlannedExercise]) -> Self {
        let items = plan
            .iter()
            .enumerate()
            .map(|(index, exercise)| WorkoutItem {
                id: format!("ai-{batch}-{index}"),
                name: exercise.name.clone(),
                sets: exercise.sets,
                reps: exercise.reps.clone(),
                completed: false,
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[WorkoutItem] {
        &self.items
    }

    /// Flip the completed flag. Returns the new flag, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    pub fn completed_count(&self) -> u32 {
        self.items.iter().filter(|item| item.completed).count() as u32
    }

    /// Uncheck everything after a session has been submitted.
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.completed = false;
        }
    }
}

/// Built-in five-exercise plan per goal.
pub fn default_plan(goal: Goal) -> Vec<WorkoutItem> {
    match goal {
        Goal::BuildMuscle => vec![
            WorkoutItem::new("bm1", "Barbell Bench Press", 4, "8-10"),
            WorkoutItem::new("bm2", "Dumbbell Rows", 4, "10-12"),
            WorkoutItem::new("bm3", "Squats", 5, "6-8"),
            WorkoutItem::new("bm4", "Overhead Press", 3, "10-12"),
            WorkoutItem::new("bm5", "Bicep Curls", 3, "12-15"),
        ],
        Goal::LoseWeight => vec![
            WorkoutItem::new("lw1", "Treadmill Run", 1, "30 min"),
            WorkoutItem::new("lw2", "Kettlebell Swings", 4, "15"),
            WorkoutItem::new("lw3", "Burpees", 3, "15"),
            WorkoutItem::new("lw4", "Jump Rope", 5, "2 min"),
            WorkoutItem::new("lw5", "Plank", 3, "60s"),
        ],
        Goal::ImproveEndurance => vec![
            WorkoutItem::new("ie1", "Cycling", 1, "45 min"),
            WorkoutItem::new("ie2", "Rowing Machine", 1, "2000m"),
            WorkoutItem::new("ie3", "Box Jumps", 4, "12"),
            WorkoutItem::new("ie4", "Farmer's Walk", 3, "50m"),
            WorkoutItem::new("ie5", "High-Knees", 3, "60s"),
        ],
    }
}
