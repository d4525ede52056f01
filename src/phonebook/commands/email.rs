use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::Email;

use super::helpers::record_mut;

pub fn set(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    let email = Email::new(email)?;
    let rec = record_mut(book, name)?;
    let message = format!("Email {} added to contact {}", email, name);
    rec.set_email(email);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![rec.clone()]))
}
