//! Multi-user progression registry.
//!
//! Holds every user's state behind its own mutex so completions for one user
//! are applied one at a time while different users proceed in parallel.
//! Subscribers receive an event for each applied session and each unlock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::broadcast;
use uuid::Uuid;

use super::clock::require_timestamp;
use super::types::{ProgressionError, SessionEvent, SessionOutcome, UserProgressionState};
use super::updater::ProgressionUpdater;
use crate::badges::BadgeId;

/// Capacity of the notification channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notifications emitted after a state change is committed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressionEvent {
    /// A session was applied
    SessionApplied {
        user_id: Uuid,
        points: u64,
        streak: u32,
    },
    /// One or more badges were unlocked
    BadgesUnlocked { user_id: Uuid, badges: Vec<BadgeId> },
}

/// Registry of per-user progression states.
pub struct ProgressionRegistry {
    updater: ProgressionUpdater,
    users: RwLock<HashMap<Uuid, Arc<Mutex<UserProgressionState>>>>,
    event_tx: broadcast::Sender<ProgressionEvent>,
}

impl Default for ProgressionRegistry {
    fn default() -> Self {
        Self::new(ProgressionUpdater::default())
    }
}

impl ProgressionRegistry {
    /// Create an empty registry.
    pub fn new(updater: ProgressionUpdater) -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            updater,
            users: RwLock::new(HashMap::new()),
            event_tx: tx,
        }
    }

    /// Subscribe to progression events.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressionEvent> {
        self.event_tx.subscribe()
    }

    /// Register or replace a user's state.
    pub fn register(&self, user_id: Uuid, state: UserProgressionState) {
        self.users
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(user_id, Arc::new(Mutex::new(state)));
    }

    pub fn contains(&self, user_id: Uuid) -> bool {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&user_id)
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of a user's current state.
    pub fn snapshot(&self, user_id: Uuid) -> Result<UserProgressionState, ProgressionError> {
        let slot = self.slot(user_id)?;
        let state = slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.clone())
    }

    /// Copies of every state, for read-only views such as the leaderboard.
    pub fn snapshots(&self) -> Vec<(Uuid, UserProgressionState)> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users
            .iter()
            .map(|(id, slot)| {
                let state = slot.lock().unwrap_or_else(|e| e.into_inner());
                (*id, state.clone())
            })
            .collect()
    }

    /// Apply a session event.
    ///
    /// The user's lock is held for the whole read-modify-write. On error the
    /// stored state is left as it was.
    pub fn apply(&self, event: &SessionEvent) -> Result<SessionOutcome, ProgressionError> {
        let now = require_timestamp(event.timestamp.as_deref()).map_err(|e| {
            tracing::warn!(user_id = %event.user_id, "Rejected session event: {}", e);
            e
        })?;

        let slot = self.slot(event.user_id)?;
        let mut state = slot.lock().unwrap_or_else(|e| e.into_inner());

        let outcome = self
            .updater
            .complete_session(&state, event.exercises_completed_count, now)?;
        *state = outcome.state.clone();
        drop(state);

        let _ = self.event_tx.send(ProgressionEvent::SessionApplied {
            user_id: event.user_id,
            points: outcome.state.points,
            streak: outcome.state.streak,
        });
        if outcome.has_unlocks() {
            let _ = self.event_tx.send(ProgressionEvent::BadgesUnlocked {
                user_id: event.user_id,
                badges: outcome.unlocked.clone(),
            });
        }

        Ok(outcome)
    }

    fn slot(&self, user_id: Uuid) -> Result<Arc<Mutex<UserProgressionState>>, ProgressionError> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&user_id)
            .cloned()
            .ok_or(ProgressionError::UnknownUser(user_id))
    }
}
