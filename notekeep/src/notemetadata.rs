use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamps of a note.
///
/// `updated_at` is never earlier than `created_at`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for NoteMetadata {
    fn default() -> Self {
        NoteMetadata::new(Utc::now())
    }
}

impl NoteMetadata {
    /// Metadata of a note created at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        NoteMetadata {
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn on_update_note(&self) -> Self {
        self.updated_at_time(Utc::now())
    }

    fn updated_at_time(&self, now: DateTime<Utc>) -> Self {
        // The wall clock can step backwards
        NoteMetadata {
            created_at: self.created_at,
            updated_at: now.max(self.created_at),
        }
    }
}
