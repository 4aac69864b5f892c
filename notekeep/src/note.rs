//! Core types of Notekeep.
use crate::notemetadata::NoteMetadata;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// ID of notes.
///
/// In a given note store ([`crate::notestore`]),
/// [`NoteID`] uniquely identifies a note.
/// IDs are opaque to the store; fresh ones come from [`NoteID::generate`].
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Hash)]
#[serde(into = "String", from = "String")]
pub struct NoteID {
    id: String,
}

impl From<NoteID> for String {
    fn from(id: NoteID) -> String {
        id.id
    }
}

impl From<String> for NoteID {
    fn from(id: String) -> NoteID {
        NoteID::new(id)
    }
}

impl From<&str> for NoteID {
    fn from(id: &str) -> NoteID {
        NoteID::new(id.to_owned())
    }
}

impl NoteID {
    pub fn new(id: String) -> Self {
        NoteID { id }
    }

    /// Generate a new [`NoteID`].
    ///
    /// We use the UUID V4 scheme.
    pub fn generate() -> Self {
        NoteID::new(Uuid::new_v4().hyphenated().to_string())
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl AsRef<str> for NoteID {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// A note as stored and handed out by a [`crate::NoteStore`].
///
/// Stores keep their own copy; whatever a caller receives is a clone and
/// cannot change the stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteID,
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub metadata: NoteMetadata,
}

impl Note {
    pub fn new(id: NoteID, title: String, content: String, metadata: NoteMetadata) -> Self {
        Note {
            id,
            title,
            content,
            metadata,
        }
    }

    pub fn get_id(&self) -> &NoteID {
        &self.id
    }

    /// Build the replacement of this note with new title and content.
    ///
    /// `id` and `created_at` carry over, `updated_at` is refreshed.
    pub fn revise(&self, title: String, content: String) -> Self {
        Note {
            id: self.id.clone(),
            title,
            content,
            metadata: self.metadata.on_update_note(),
        }
    }
}
