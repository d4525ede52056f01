use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Record;

pub fn record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

pub fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}
