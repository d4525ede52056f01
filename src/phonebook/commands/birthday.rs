use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, UpcomingBirthday};
use crate::error::Result;
use crate::fields::Birthday;
use chrono::NaiveDate;

use super::helpers::{record, record_mut};

/// Sets a contact's birthday from `DD/MM/YYYY` text, replacing any previous one.
pub fn set(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let birthday = Birthday::parse(date)?;
    let rec = record_mut(book, name)?;
    rec.add_birthday(birthday);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Birthday {} added to contact {}",
            birthday, name
        )))
        .with_affected_records(vec![rec.clone()]))
}

pub fn days_to(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let rec = record(book, name)?;
    let days = rec.days_to_birthday_from(today)?;
    Ok(CmdResult::default()
        .with_days(days)
        .with_message(CmdMessage::info(format!(
            "{} days to {}'s birthday",
            days, name
        ))))
}

/// Contacts whose birthday comes within `within_days`.
pub fn upcoming(book: &AddressBook, within_days: i64, today: NaiveDate) -> Result<CmdResult> {
    let upcoming: Vec<_> = book
        .upcoming_birthdays(within_days, today)
        .into_iter()
        .map(|(rec, days)| UpcomingBirthday {
            record: rec.clone(),
            days,
        })
        .collect();

    let summary = if upcoming.is_empty() {
        CmdMessage::info(format!("No birthdays in the next {} days", within_days))
    } else {
        CmdMessage::info(format!("Our birthday people in {} days", within_days))
    };
    Ok(CmdResult::default()
        .with_upcoming(upcoming)
        .with_message(summary))
}
