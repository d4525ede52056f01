use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "A small personal address book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the saved book and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// One line typed at the interactive prompt.
#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command names use the underscore spelling of the interactive prompt;
/// dashed aliases are accepted too.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact with its first phone
    #[command(name = "add")]
    Add { name: String, phone: String },

    /// Add another phone to a contact
    #[command(name = "add_phone", alias = "add-phone")]
    AddPhone { name: String, phone: String },

    /// Set a contact's birthday (DD/MM/YYYY)
    #[command(name = "add_b", alias = "add-b")]
    AddBirthday { name: String, date: String },

    /// Set a contact's email
    #[command(name = "add_email", alias = "add-email")]
    AddEmail { name: String, email: String },

    /// Replace one of a contact's phones
    #[command(name = "change")]
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Remove a phone from a contact
    #[command(name = "remove_phone", alias = "remove-phone")]
    RemovePhone { name: String, phone: String },

    /// Show a contact's phones
    #[command(name = "phone")]
    Phone { name: String },

    /// Find a phone within a contact
    #[command(name = "seek")]
    Seek { name: String, phone: String },

    /// Delete a contact
    #[command(name = "delete", alias = "rm")]
    Delete { name: String },

    /// Days until a contact's birthday
    #[command(name = "days_to_birthday", alias = "days-to-birthday")]
    DaysToBirthday { name: String },

    /// Contacts with a birthday within N days
    #[command(name = "birthday")]
    Birthday { days: u32 },

    /// Find contacts by name, or by phone when the text is all digits
    #[command(name = "find", alias = "search")]
    Find { text: String },

    /// Show all contacts, N per page
    #[command(name = "show_all", alias = "show-all")]
    ShowAll { page_size: Option<NonZeroUsize> },

    /// Save the address book
    #[command(name = "save")]
    Save,

    /// Load the saved address book
    #[command(name = "load")]
    Load,

    /// Greeting
    #[command(name = "hello")]
    Hello,

    /// Start the interactive prompt (default)
    #[command(name = "repl")]
    Repl,
}
