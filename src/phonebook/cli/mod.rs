//! Argument parsing, the interactive prompt, and terminal output for the
//! binary. Not part of the library API.

pub mod handlers;
mod print;
pub mod repl;
pub mod setup;
