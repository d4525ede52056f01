//! # Phonebook Architecture
//!
//! Phonebook is a small personal address book. Like any tool that should
//! outlive its first UI, it is a library with a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot subcommands and the interactive REPL            │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook and its store                       │
//! │  - Normalizes names, supplies today's date                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user-facing operation                   │
//! │  - Returns CmdResult with records and leveled messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book.rs, model.rs, fields.rs)                        │
//! │  - AddressBook index, Record, validated field types         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait: whole-book save and load                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Globals
//!
//! There is exactly one [`book::AddressBook`] per [`api::BookApi`], and the
//! caller owns the API. Tests build as many independent books as they like.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code. This is where the
//!    rules (validation, uniqueness, search, pagination, birthday
//!    arithmetic) are pinned down.
//! 2. **API**: normalization and dirty tracking, against `InMemoryStore`.
//! 3. **CLI**: end-to-end tests in `tests/` driving the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`book`]: The address book index and its paginator
//! - [`commands`]: Business logic for each command
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - [`fields`]: Validated value types (name, phone, email, birthday)
//! - [`model`]: The contact `Record`
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
