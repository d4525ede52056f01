//! # Address Book
//!
//! [`AddressBook`] is the indexed collection of [`Record`]s, keyed by name.
//!
//! Records are kept in insertion order, which is the order every listing and
//! search reports. A side index maps each name to its position so lookups do
//! not scan the list; it is rebuilt whenever a removal shifts positions.
//!
//! ## Pagination
//!
//! [`AddressBook::paginate`] returns a [`Pages`] iterator that owns its own
//! cursor. Two listings in flight never share state, and a new call always
//! starts from the first record.
//!
//! ## Persistence
//!
//! The book serializes as a plain list of records. Deserializing goes through
//! [`AddressBook::add_record`], so a blob with two records of the same name is
//! rejected.

use crate::error::{BookError, Result};
use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    /// Inserts a record. Fails if a record with the same name exists; the
    /// book is left untouched in that case.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        if self.index.contains_key(record.name()) {
            return Err(BookError::DuplicateName(record.name().to_string()));
        }
        self.index
            .insert(record.name().to_string(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Exact-key lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.index.get(name).map(|&pos| &mut self.records[pos])
    }

    /// Removes and returns the record, or `None` if there is no such name.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let pos = self.index.remove(name)?;
        let record = self.records.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(record)
    }

    /// An all-digit query matches phone numbers, anything else matches names.
    /// Both are substring matches; results keep insertion order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        if is_phone_query(query) {
            self.records
                .iter()
                .filter(|r| r.find_phone(query).is_some())
                .collect()
        } else {
            self.records
                .iter()
                .filter(|r| r.name().contains(query))
                .collect()
        }
    }

    /// Lazily renders the book in pages of `page_size` records, or as a
    /// single page when no size (or zero) is given.
    pub fn paginate(&self, page_size: Option<usize>) -> Pages<'_> {
        Pages {
            records: &self.records,
            page_size: page_size.filter(|&n| n > 0),
            position: 0,
        }
    }

    /// Records whose next birthday is at most `within_days` away, with the
    /// day count. Records without a birthday are skipped.
    pub fn upcoming_birthdays(&self, within_days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        self.records
            .iter()
            .filter_map(|r| {
                let days = r.days_to_birthday_from(today).ok()?;
                (days <= within_days).then_some((r, days))
            })
            .collect()
    }
}

fn is_phone_query(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|c| c.is_ascii_digit())
}

impl TryFrom<Vec<Record>> for AddressBook {
    type Error = BookError;

    fn try_from(records: Vec<Record>) -> Result<Self> {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record)?;
        }
        Ok(book)
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

/// Iterator over rendered pages of an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: Option<usize>,
    position: usize,
}

impl Iterator for Pages<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.records.len() {
            return None;
        }
        let end = match self.page_size {
            Some(size) => (self.position + size).min(self.records.len()),
            None => self.records.len(),
        };
        let page = self.records[self.position..end]
            .iter()
            .map(Record::to_string)
            .collect();
        self.position = end;
        Some(page)
    }
}
