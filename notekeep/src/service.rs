//! The operations offered to clients, on top of a [`NoteStore`].
use crate::errors::{NoteServiceError, ValidationError};
use crate::notemetadata::NoteMetadata;
use crate::notestore::BoxedNoteStore;
use crate::{Note, NoteID, NoteStore};

/// Note-keeping operations.
///
/// The service owns identity and timestamps: it generates the [`NoteID`] of a new note and
/// stamps it, so a store only ever deals with complete notes.
/// Titles are validated here, before the store is involved.
pub struct NoteService {
    store: BoxedNoteStore,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

impl NoteService {
    pub fn new(store: BoxedNoteStore) -> Self {
        NoteService { store }
    }

    pub fn store(&self) -> &(dyn NoteStore + Send + Sync) {
        self.store.as_ref()
    }

    /// Create a note with a fresh ID.
    ///
    /// Both timestamps are set to the same instant.
    pub async fn create(&self, title: String, content: String) -> Result<Note, NoteServiceError> {
        validate_title(&title)?;
        let note = Note::new(NoteID::generate(), title, content, NoteMetadata::default());
        self.store.create(note.clone()).await?;
        Ok(note)
    }

    pub async fn list(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get_by_id(&self, id: &NoteID) -> Result<Note, NoteServiceError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Replace the title and content of a note, refreshing `updated_at`.
    ///
    /// Concurrent updates of the same note are last-writer-wins.
    pub async fn update(
        &self,
        id: &NoteID,
        title: String,
        content: String,
    ) -> Result<Note, NoteServiceError> {
        validate_title(&title)?;
        let revised = self.store.get_by_id(id).await?.revise(title, content);
        self.store.update(id, revised.clone()).await?;
        Ok(revised)
    }

    pub async fn delete(&self, id: &NoteID) -> Result<(), NoteServiceError> {
        Ok(self.store.delete(id).await?)
    }

    /// Fill the store with a few notes, for development.
    pub async fn populate_sample_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        let samples = [
            ("Welcome", "Notes live in memory until the server stops."),
            ("Groceries", "milk\neggs\nbread"),
            ("Empty", ""),
        ];
        let mut notes = Vec::with_capacity(samples.len());
        for (title, content) in samples {
            notes.push(self.create(title.to_owned(), content.to_owned()).await?);
        }
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NoteStoreError;
    use crate::notestore::tests::note;
    use crate::InMemoryStore;
    use futures::future::BoxFuture;

    fn service() -> NoteService {
        NoteService::new(Box::new(InMemoryStore::new()))
    }

    /// A backend whose every operation fails.
    struct BrokenStore;

    impl NoteStore for BrokenStore {
        fn create(&self, _note: Note) -> BoxFuture<Result<(), NoteStoreError>> {
            Box::pin(async { Err(NoteStoreError::Backend("create".into())) })
        }

        fn get_by_id<'a>(
            &'a self,
            _id: &'a NoteID,
        ) -> BoxFuture<'a, Result<Note, NoteStoreError>> {
            Box::pin(async { Err(NoteStoreError::Backend("get_by_id".into())) })
        }

        fn get_all(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
            Box::pin(async { Err(NoteStoreError::Backend("get_all".into())) })
        }

        fn update<'a>(
            &'a self,
            _id: &'a NoteID,
            _note: Note,
        ) -> BoxFuture<'a, Result<(), NoteStoreError>> {
            Box::pin(async { Err(NoteStoreError::Backend("update".into())) })
        }

        fn delete<'a>(&'a self, _id: &'a NoteID) -> BoxFuture<'a, Result<(), NoteStoreError>> {
            Box::pin(async { Err(NoteStoreError::Backend("delete".into())) })
        }

        fn len(&self) -> BoxFuture<Result<usize, NoteStoreError>> {
            Box::pin(async { Err(NoteStoreError::Backend("len".into())) })
        }
    }

    #[tokio::test]
    async fn create_assigns_identity() {
        let service = service();
        let n1 = service.create("Foo".into(), "".into()).await.unwrap();
        let n2 = service.create("Foo".into(), "".into()).await.unwrap();
        assert_ne!(n1.id, n2.id);
        assert_eq!(n1.metadata.created_at, n1.metadata.updated_at);
        assert_eq!(service.get_by_id(&n1.id).await.unwrap(), n1);
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let service = service();
        assert!(matches!(
            service.create("".into(), "content".into()).await,
            Err(NoteServiceError::Validation(ValidationError::EmptyTitle))
        ));
        assert_eq!(service.store().len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_title_never_reaches_store() {
        let service = NoteService::new(Box::new(BrokenStore));
        assert!(matches!(
            service.create("".into(), "".into()).await,
            Err(NoteServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn missing_note_is_not_found() {
        let service = service();
        let id = NoteID::from("nope");
        assert!(matches!(
            service.get_by_id(&id).await,
            Err(NoteServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(&id).await,
            Err(NoteServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.update(&id, "Foo".into(), "".into()).await,
            Err(NoteServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_and_delete() {
        let service = service();
        let n1 = service.create("Foo".into(), "".into()).await.unwrap();
        let n2 = service.create("Bar".into(), "".into()).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 2);
        service.delete(&n1.id).await.unwrap();
        assert_eq!(service.list().await.unwrap(), vec![n2]);
    }

    #[tokio::test]
    async fn update_refreshes_updated_at() {
        let service = service();
        let n1 = service.create("Foo".into(), "Bar".into()).await.unwrap();
        let n1_updated = service
            .update(&n1.id, "Foo1".into(), "Bar1".into())
            .await
            .unwrap();
        assert_eq!(n1_updated.id, n1.id);
        assert_eq!(n1_updated.metadata.created_at, n1.metadata.created_at);
        assert!(n1_updated.metadata.updated_at >= n1.metadata.updated_at);
        assert_eq!(service.get_by_id(&n1.id).await.unwrap(), n1_updated);
    }

    #[tokio::test]
    async fn update_rejects_empty_title() {
        let service = service();
        let n1 = service.create("Foo".into(), "".into()).await.unwrap();
        assert!(matches!(
            service.update(&n1.id, "".into(), "".into()).await,
            Err(NoteServiceError::Validation(_))
        ));
        assert_eq!(service.get_by_id(&n1.id).await.unwrap(), n1);
    }

    #[tokio::test]
    async fn backend_failure_is_internal() {
        let service = NoteService::new(Box::new(BrokenStore));
        let id = NoteID::from("n1");
        assert!(matches!(
            service.create("Foo".into(), "".into()).await,
            Err(NoteServiceError::Internal(_))
        ));
        assert!(matches!(
            service.list().await,
            Err(NoteServiceError::Internal(_))
        ));
        assert!(matches!(
            service.get_by_id(&id).await,
            Err(NoteServiceError::Internal(_))
        ));
        assert!(matches!(
            service.delete(&id).await,
            Err(NoteServiceError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn works_over_any_store() {
        let service = service();
        service.store().create(note("n1", "Foo", "")).await.unwrap();
        assert_eq!(service.get_by_id(&"n1".into()).await.unwrap().title, "Foo");
    }

    #[tokio::test]
    async fn sample_notes() {
        let service = service();
        let notes = service.populate_sample_notes().await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), notes.len());
        assert!(notes.iter().all(|n| !n.title.is_empty()));
    }
}
