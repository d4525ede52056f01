use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn save<S: BookStore>(store: &mut S, book: &AddressBook) -> Result<CmdResult> {
    store.save(book)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Phonebook saved ({} contacts)",
        book.len()
    ))))
}

/// Reads the saved book. The caller decides what to do with it; the
/// in-memory book is not touched here.
pub fn load<S: BookStore>(store: &S) -> Result<(AddressBook, CmdResult)> {
    let book = store.load()?;
    let result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Phonebook loaded ({} contacts)",
        book.len()
    )));
    Ok((book, result))
}
