//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::*;
use futures::future::BoxFuture;

mod in_memory;

pub use in_memory::InMemoryStore;

/// A storage backend behind dynamic dispatch, shareable across request handlers.
pub type BoxedNoteStore = Box<dyn NoteStore + Send + Sync>;

/// An abstraction for storage backends.
///
/// Every operation is safe to call concurrently without external locking.
/// Writes take effect atomically: a reader sees a note either before or after a write,
/// never in between.
///
/// A [`NoteStore`] reports errors but never logs them.
/// Deciding whether an error is worth logging is up to the caller.
pub trait NoteStore {
    /// Store a new note under its [`NoteID`].
    ///
    /// The caller assigns the ID.
    /// An existing note with the same ID is overwritten.
    fn create(&self, note: Note) -> BoxFuture<Result<(), NoteStoreError>>;
    /// Get the current version of a note.
    fn get_by_id<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<Note, NoteStoreError>>;
    /// Get a snapshot of all notes, in no particular order.
    ///
    /// The returned notes are copies, so later writes to the store don't show up in them.
    fn get_all(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>>;
    /// Replace the note stored under `id`.
    ///
    /// Fails with [`NoteStoreError::NoteNotExist`] if there is no such note, leaving the
    /// store untouched.
    /// Whoever builds the replacement is responsible for its timestamps.
    fn update<'a>(
        &'a self,
        id: &'a NoteID,
        note: Note,
    ) -> BoxFuture<'a, Result<(), NoteStoreError>>;
    /// Delete a note.
    ///
    /// Deleting a note that doesn't exist, including one that was already deleted,
    /// fails with [`NoteStoreError::NoteNotExist`].
    fn delete<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<(), NoteStoreError>>;
    /// Number of notes currently stored.
    fn len(&self) -> BoxFuture<Result<usize, NoteStoreError>>;
}
