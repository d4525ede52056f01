use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

use super::helpers::{record, record_mut};

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let rec = record_mut(book, name)?;
    let message = rec.add_phone(phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![rec.clone()]))
}

pub fn change(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let rec = record_mut(book, name)?;
    let message = rec.edit_phone(old, new)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![rec.clone()]))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let rec = record_mut(book, name)?;
    let message = rec.remove_phone(phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![rec.clone()]))
}

/// All phones of one contact.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let rec = record(book, name)?;
    let mut result = CmdResult::default().with_phones(rec.phones().to_vec());
    if rec.phones().is_empty() {
        result.add_message(CmdMessage::info(format!("Contact {} has no phones", name)));
    }
    Ok(result)
}

/// Looks a phone up within one contact by substring.
pub fn seek(book: &AddressBook, name: &str, query: &str) -> Result<CmdResult> {
    let rec = record(book, name)?;
    let phone = rec
        .find_phone(query)
        .ok_or_else(|| BookError::PhoneNotFound {
            name: name.to_string(),
            phone: query.to_string(),
        })?;
    Ok(CmdResult::default().with_phones(vec![phone.clone()]))
}
