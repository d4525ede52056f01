//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every phonebook operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the in-memory [`AddressBook`] and the [`BookStore`] it is saved to
//! - **Normalizes inputs**: names are trimmed and lower-cased, text queries
//!   lower-cased, so lookups are case-insensitive
//! - **Supplies the clock**: birthday commands get today's local date here
//! - **Tracks changes**: a dirty flag is raised by every mutating command and
//!   cleared by save and load
//!
//! Business rules stay in `commands/*.rs` and the model; nothing here prints.
//!
//! ## Generic Over BookStore
//!
//! - Production: `BookApi<FileStore>`
//! - Testing: `BookApi<InMemoryStore>`

use crate::book::{AddressBook, Pages};
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use tracing::debug;

pub use crate::commands::{CmdMessage, MessageLevel, UpcomingBirthday};

pub struct BookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    dirty: bool,
}

impl<S: BookStore> BookApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_book(store, AddressBook::new())
    }

    pub fn with_book(store: S, book: AddressBook) -> Self {
        Self {
            store,
            book,
            dirty: false,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the book changed since it was last saved or loaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn has_saved_book(&self) -> bool {
        self.store.exists()
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let name = normalize_name(name);
        debug!(%name, "add contact");
        let result = commands::create::run(&mut self.book, &name, phone)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::add(&mut self.book, &normalize_name(name), phone)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::phones::change(&mut self.book, &normalize_name(name), old, new)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::remove(&mut self.book, &normalize_name(name), phone)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn show_phones(&self, name: &str) -> Result<CmdResult> {
        commands::phones::show(&self.book, &normalize_name(name))
    }

    pub fn seek_phone(&self, name: &str, query: &str) -> Result<CmdResult> {
        commands::phones::seek(&self.book, &normalize_name(name), query)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        let result = commands::birthday::set(&mut self.book, &normalize_name(name), date)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn set_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::email::set(&mut self.book, &normalize_name(name), email)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let name = normalize_name(name);
        debug!(%name, "delete contact");
        let result = commands::delete::run(&mut self.book, &name)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthday::days_to(&self.book, &normalize_name(name), today())
    }

    pub fn upcoming_birthdays(&self, within_days: i64) -> Result<CmdResult> {
        commands::birthday::upcoming(&self.book, within_days, today())
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, &normalize_query(query))
    }

    pub fn pages(&self, page_size: Option<usize>) -> Pages<'_> {
        commands::list::run(&self.book, page_size)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        let result = commands::persist::save(&mut self.store, &self.book)?;
        self.dirty = false;
        Ok(result)
    }

    /// Replaces the in-memory book with the saved one.
    pub fn load(&mut self) -> Result<CmdResult> {
        let (book, result) = commands::persist::load(&self.store)?;
        self.book = book;
        self.dirty = false;
        Ok(result)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Trimmed and lower-cased. Digit queries come out unchanged apart from
/// the trim, so phone searches are unaffected.
fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
