use super::print::{
    print_messages, print_page, print_page_header, print_phones, print_records, print_upcoming,
    GREETING,
};
use super::setup::Commands;
use phonebook::api::BookApi;
use phonebook::config::BookConfig;
use phonebook::error::Result;
use phonebook::store::fs::FileStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::num::NonZeroUsize;

pub struct AppContext {
    pub api: BookApi<FileStore>,
    pub config: BookConfig,
}

pub fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Add { name, phone } => {
            let result = ctx.api.add_contact(&name, &phone)?;
            print_messages(&result.messages);
        }
        Commands::AddPhone { name, phone } => {
            let result = ctx.api.add_phone(&name, &phone)?;
            print_messages(&result.messages);
        }
        Commands::AddBirthday { name, date } => {
            let result = ctx.api.set_birthday(&name, &date)?;
            print_messages(&result.messages);
        }
        Commands::AddEmail { name, email } => {
            let result = ctx.api.set_email(&name, &email)?;
            print_messages(&result.messages);
        }
        Commands::Change {
            name,
            old_phone,
            new_phone,
        } => {
            let result = ctx.api.change_phone(&name, &old_phone, &new_phone)?;
            print_messages(&result.messages);
        }
        Commands::RemovePhone { name, phone } => {
            let result = ctx.api.remove_phone(&name, &phone)?;
            print_messages(&result.messages);
        }
        Commands::Phone { name } => {
            let result = ctx.api.show_phones(&name)?;
            print_phones(&result.phones);
            print_messages(&result.messages);
        }
        Commands::Seek { name, phone } => {
            let result = ctx.api.seek_phone(&name, &phone)?;
            print_phones(&result.phones);
        }
        Commands::Delete { name } => {
            let result = ctx.api.delete_contact(&name)?;
            print_messages(&result.messages);
        }
        Commands::DaysToBirthday { name } => {
            let result = ctx.api.days_to_birthday(&name)?;
            print_messages(&result.messages);
        }
        Commands::Birthday { days } => {
            let result = ctx.api.upcoming_birthdays(i64::from(days))?;
            print_upcoming(&result.upcoming);
            print_messages(&result.messages);
        }
        Commands::Find { text } => {
            let result = ctx.api.search(&text)?;
            print_records(&result.listed_records);
            print_messages(&result.messages);
        }
        Commands::ShowAll { page_size } => handle_show_all(ctx, page_size)?,
        Commands::Save => {
            let result = ctx.api.save()?;
            print_messages(&result.messages);
        }
        Commands::Load => {
            let result = ctx.api.load()?;
            print_messages(&result.messages);
        }
        Commands::Hello => println!("{}", GREETING),
        Commands::Repl => println!("Already in interactive mode."),
    }
    Ok(())
}

/// Prints one page at a time, waiting for Enter between pages when a person
/// is at the keyboard. Numbered headers are printed only when paging.
fn handle_show_all(ctx: &AppContext, page_size: Option<NonZeroUsize>) -> Result<()> {
    let page_size = page_size
        .map(NonZeroUsize::get)
        .or(ctx.config.page_size)
        .filter(|&n| n > 0);
    let interactive = io::stdin().is_terminal();

    let mut pages = ctx.api.pages(page_size).peekable();
    if pages.peek().is_none() {
        println!("Address book is empty.");
        return Ok(());
    }

    let mut number = 0;
    while let Some(page) = pages.next() {
        number += 1;
        if page_size.is_some() {
            print_page_header(number);
        }
        print_page(&page);
        if interactive && pages.peek().is_some() {
            print!("Press Enter for next records");
            io::stdout().flush()?;
            let mut buf = String::new();
            io::stdin().lock().read_line(&mut buf)?;
        }
    }
    Ok(())
}
