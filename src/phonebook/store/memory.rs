use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use std::io;

/// In-memory storage for testing and development.
/// Holds the serialized blob, so saves and loads exercise the same encoding
/// as [`FileStore`](super::fs::FileStore). Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.blob = Some(encode(book)?);
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        match &self.blob {
            Some(blob) => decode(blob),
            None => Err(BookError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no saved address book",
            ))),
        }
    }

    fn exists(&self) -> bool {
        self.blob.is_some()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::Birthday;
    use crate::model::Record;
    use chrono::NaiveDate;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        /// Adds `count` contacts named `contact 1`, `contact 2`, ...
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("contact {}", i + 1);
                let phone = format!("{:010}", i + 1);
                self.book
                    .add_record(Record::with_phone(&name, &phone).unwrap())
                    .unwrap();
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            self.book
                .add_record(Record::with_phone(name, phone).unwrap())
                .unwrap();
            self
        }

        pub fn with_birthday_contact(mut self, name: &str, birthday: NaiveDate) -> Self {
            let record = Record::new(name)
                .unwrap()
                .with_birthday(Birthday::new(birthday));
            self.book.add_record(record).unwrap();
            self
        }
    }
}
