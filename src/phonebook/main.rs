use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::BookApi;
use phonebook::config::BookConfig;
use phonebook::error::{BookError, Result};
use phonebook::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::handlers::{dispatch, AppContext};
use cli::setup::{Cli, Commands};

const HOME_ENV: &str = "PHONEBOOK_HOME";
const LOG_ENV: &str = "PHONEBOOK_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Repl) => cli::repl::run(&mut ctx),
        Some(command) => run_once(&mut ctx, command),
    }
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = BookConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        BookConfig::default()
    });

    let store = FileStore::in_dir(&data_dir, &config.data_file);
    Ok(AppContext {
        api: BookApi::new(store),
        config,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "phonebook", "phonebook")
        .ok_or_else(|| BookError::Api("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// One-shot mode: the saved book is loaded first and written back if the
/// command changed it.
fn run_once(ctx: &mut AppContext, command: Commands) -> Result<()> {
    if ctx.api.has_saved_book() {
        ctx.api.load()?;
    }

    dispatch(ctx, command)?;

    if ctx.api.is_dirty() {
        ctx.api.save()?;
        debug!("saved changes");
    }
    Ok(())
}
