use thiserror::Error;

use crate::NoteID;

/// Errors reported by a [`crate::NoteStore`].
#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    /// A failure of the backing store itself.
    ///
    /// The in-memory store never produces this.
    #[error("note store backend error: {0}")]
    Backend(String),
}

/// Rejection of a request before it reaches the store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,
}

/// Outcome of a failed [`crate::NoteService`] operation.
#[derive(Error, Debug)]
pub enum NoteServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("note `{0}` doesn't exist")]
    NotFound(NoteID),
    /// Anything the store reports other than a missing note.
    ///
    /// Displays without detail; the cause is kept as the source.
    #[error("internal error")]
    Internal(#[source] NoteStoreError),
}

impl From<NoteStoreError> for NoteServiceError {
    fn from(e: NoteStoreError) -> Self {
        match e {
            NoteStoreError::NoteNotExist(id) => NoteServiceError::NotFound(id),
            e => NoteServiceError::Internal(e),
        }
    }
}
