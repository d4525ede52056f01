use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact deleted: {}", name)))
        .with_affected_records(vec![removed]))
}
