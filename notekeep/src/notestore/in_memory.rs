//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::{Note, NoteID, NoteStore};
use futures::future::BoxFuture;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// The unsynchronized part of [`InMemoryStore`].
///
/// Methods here assume the caller holds the appropriate side of the lock.
#[derive(Debug, Default)]
struct InMemoryStoreInner {
    notes: HashMap<NoteID, Note>,
}

impl InMemoryStoreInner {
    pub fn new() -> Self {
        Default::default()
    }

    fn create(&mut self, note: Note) -> Result<(), NoteStoreError> {
        self.notes.insert(note.id.clone(), note);
        Ok(())
    }

    fn get_by_id(&self, id: &NoteID) -> Result<Note, NoteStoreError> {
        self.notes
            .get(id)
            .cloned()
            .ok_or_else(|| NoteStoreError::NoteNotExist(id.clone()))
    }

    fn get_all(&self) -> Result<Vec<Note>, NoteStoreError> {
        Ok(self.notes.values().cloned().collect())
    }

    fn update(&mut self, id: &NoteID, note: Note) -> Result<(), NoteStoreError> {
        let stored = self
            .notes
            .get_mut(id)
            .ok_or_else(|| NoteStoreError::NoteNotExist(id.clone()))?;
        *stored = note;
        Ok(())
    }

    fn delete(&mut self, id: &NoteID) -> Result<(), NoteStoreError> {
        self.notes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| NoteStoreError::NoteNotExist(id.clone()))
    }
}

/// In-memory storage.
///
/// There is no persistence layer: everything is gone once the store is dropped.
/// A single reader/writer lock guards the whole map, so lookups and listings run
/// side by side while a write has the map to itself.
#[derive(Debug)]
pub struct InMemoryStore {
    ims: RwLock<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            ims: RwLock::new(InMemoryStoreInner::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryStore {
    fn create(&self, note: Note) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.create(note)
        })
    }

    fn get_by_id<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            ims.get_by_id(id)
        })
    }

    fn get_all(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            ims.get_all()
        })
    }

    fn update<'a>(
        &'a self,
        id: &'a NoteID,
        note: Note,
    ) -> BoxFuture<'a, Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.update(id, note)
        })
    }

    fn delete<'a>(&'a self, id: &'a NoteID) -> BoxFuture<'a, Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.delete(id)
        })
    }

    fn len(&self) -> BoxFuture<Result<usize, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.notes.len())
        })
    }
}
