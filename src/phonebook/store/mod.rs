//! # Storage Layer
//!
//! The address book lives in memory; storage only ever moves the whole book
//! at once. [`BookStore`] is that boundary: save everything, load everything.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per book
//!   (`phone_book.bin` by default) in the data directory.
//! - [`memory::InMemoryStore`]: keeps the same serialized blob in memory,
//!   for tests.
//!
//! ## Storage Format
//!
//! The blob is the book serialized with `serde_json`: a list of records in
//! insertion order. It is private to this crate and carries no version; a
//! book saved by one release is not guaranteed to load in another.
//!
//! Saves are whole-file replacements through a temporary file and a rename,
//! so an interrupted save leaves either the previous book or a stray `.tmp`
//! file next to it.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Read back the stored book.
    ///
    /// Fails with an I/O error when nothing was saved yet, and with a
    /// serialization error when the stored blob is malformed.
    fn load(&self) -> Result<AddressBook>;

    /// Whether a saved book exists.
    fn exists(&self) -> bool;
}

pub(crate) fn encode(book: &AddressBook) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(book)?)
}

pub(crate) fn decode(blob: &[u8]) -> Result<AddressBook> {
    Ok(serde_json::from_slice(blob)?)
}
