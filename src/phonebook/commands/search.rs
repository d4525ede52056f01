use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let listed: Vec<_> = book.search(query).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("Nothing was found for your request."));
    }
    Ok(result.with_listed_records(listed))
}
