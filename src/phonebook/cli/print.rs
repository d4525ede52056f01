use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel, UpcomingBirthday};
use phonebook::error::BookError;
use phonebook::fields::Phone;
use phonebook::model::Record;

pub(super) const GREETING: &str = "Welcome to Address Book.\nType command or 'help' for more information.";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_error(error: &BookError) {
    eprintln!("{} {}", "Error:".red(), error);
}

pub(super) fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", record);
    }
}

pub(super) fn print_page_header(number: usize) {
    println!("{}", format!("Page {}", number).dimmed());
}

pub(super) fn print_page(page: &[String]) {
    for line in page {
        println!("{}", line);
    }
}

pub(super) fn print_phones(phones: &[Phone]) {
    for phone in phones {
        println!("{}", phone);
    }
}

pub(super) fn print_upcoming(upcoming: &[UpcomingBirthday]) {
    for entry in upcoming {
        println!(
            "{} {}",
            entry.record,
            format!("birthday in {} days", entry.days).yellow()
        );
    }
}
