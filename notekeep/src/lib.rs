//! Notekeep: a small note-keeping service.
//!
//! The crate holds the concurrent note storage ([`notestore`]) and the
//! request-handling contract built on top of it ([`service`]).
pub mod errors;
pub mod note;
pub mod notemetadata;
pub mod notestore;
pub mod service;

pub use note::{Note, NoteID};
pub use notestore::{BoxedNoteStore, InMemoryStore, NoteStore};
pub use service::NoteService;
