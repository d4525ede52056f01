use super::handlers::{dispatch, AppContext};
use super::print::{print_error, print_messages, GREETING};
use super::setup::ReplLine;
use clap::Parser;
use phonebook::api::CmdMessage;
use phonebook::error::Result;
use std::io::{self, Write};
use tracing::{debug, warn};

const EXIT_WORDS: &[&str] = &["exit", "close", "good_bye"];
const PROMPT: &str = ">>> ";

pub fn run(ctx: &mut AppContext) -> Result<()> {
    println!("{}", GREETING);

    // A saved book that fails to load must not be overwritten on exit.
    let mut autosave = ctx.config.autosave;
    if ctx.config.autoload && ctx.api.has_saved_book() {
        match ctx.api.load() {
            Ok(result) => print_messages(&result.messages),
            Err(e) => {
                warn!(error = %e, "could not load saved address book");
                autosave = false;
                print_messages(&[CmdMessage::warning(format!(
                    "Could not load saved address book: {}. Autosave is off for this session; \
                     use save to overwrite it.",
                    e
                ))]);
            }
        }
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let Some(first) = words.first_mut() else {
            continue;
        };
        *first = first.to_lowercase();
        if EXIT_WORDS.contains(&first.as_str()) {
            break;
        }

        debug!(command = %words[0], "repl command");
        match ReplLine::try_parse_from(&words) {
            Ok(parsed) => {
                if let Err(e) = dispatch(ctx, parsed.command) {
                    print_error(&e);
                }
            }
            // Usage errors and `help` both land here; clap renders them.
            Err(e) => e.print()?,
        }
    }

    if autosave && ctx.api.is_dirty() {
        let result = ctx.api.save()?;
        print_messages(&result.messages);
    }
    println!("Good bye!");
    Ok(())
}
