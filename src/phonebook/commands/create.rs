use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = Record::with_phone(name, phone)?;
    book.add_record(record.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact added: {}", record)))
        .with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search;
    use crate::error::BookError;

    #[test]
    fn adds_contact_with_first_phone() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "john", "1234567890").unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(result.affected_records[0].name(), "john");
        assert_eq!(
            result.messages[0].content,
            "Contact added: Contact name: john, birthday: none, phones: 1234567890"
        );
    }

    #[test]
    fn second_add_with_same_name_is_rejected() {
        let mut book = AddressBook::new();
        run(&mut book, "john", "1234567890").unwrap();

        let err = run(&mut book, "john", "5555555555").unwrap_err();
        assert!(matches!(err, BookError::DuplicateName(_)));

        let found = search::run(&book, "john").unwrap();
        assert_eq!(found.listed_records.len(), 1);
        let phones: Vec<_> = found.listed_records[0]
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(phones, ["1234567890"]);
    }

    #[test]
    fn invalid_phone_adds_nothing() {
        let mut book = AddressBook::new();
        assert!(matches!(
            run(&mut book, "john", "12-34"),
            Err(BookError::Format { .. })
        ));
        assert!(book.is_empty());
    }
}
