mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, contacts, search, transfer, Context};
use crate::error::{exit_code_for, report_error};
use dialbook_config as config;
use dialbook_store::{paths, ContactManager, Store};

#[derive(Debug, Parser)]
#[command(name = "dialbook", version, about = "Personal address book with keypad search")]
struct Cli {
    /// Contacts file to use instead of the configured or default one
    #[arg(long, global = true)]
    contacts_file: Option<PathBuf>,
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Add a contact
    Add(contacts::AddArgs),
    /// Change fields of a contact
    Edit(contacts::EditArgs),
    /// Show one contact by its list position
    Show(contacts::PositionArgs),
    /// List all contacts or only the frequent ones
    List(contacts::ListArgs),
    /// Delete a contact by its list position
    Delete(contacts::PositionArgs),
    /// Toggle the frequent flag
    Star(contacts::PositionArgs),
    /// Search by name, phone, email or keypad digits
    Search(search::SearchArgs),
    /// Print the keypad digits for some text
    Keypad(search::KeypadArgs),
    /// Import contacts from an xlsx, txt, md or json file
    Import(transfer::ImportArgs),
    /// Export all contacts to a file
    Export(transfer::ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        contacts_file,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        Command::Keypad(args) => search::keypad_code(args, json),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }
            let contacts_path =
                paths::resolve_contacts_path(contacts_file, app_config.contacts_file.clone())
                    .with_context(|| "resolve contacts file")?;
            debug!(path = %contacts_path.display(), "contacts file resolved");

            let store = Store::open(&contacts_path)
                .with_context(|| format!("open contacts file {}", contacts_path.display()))?;
            let mut manager = ContactManager::new(store);
            let mut ctx = Context {
                manager: &mut manager,
                json,
                config: &app_config,
            };

            match command {
                Command::Add(args) => contacts::add_contact(&mut ctx, args),
                Command::Edit(args) => contacts::edit_contact(&mut ctx, args),
                Command::Show(args) => contacts::show_contact(&ctx, args),
                Command::List(args) => contacts::list_contacts(&ctx, args),
                Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
                Command::Star(args) => contacts::star_contact(&mut ctx, args),
                Command::Search(args) => search::search_contacts(&ctx, args),
                Command::Import(args) => transfer::import_contacts(&mut ctx, args),
                Command::Export(args) => transfer::export_contacts(&ctx, args),
                Command::Completions(_) | Command::Keypad(_) => {
                    unreachable!("handled before the contacts file is opened")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
