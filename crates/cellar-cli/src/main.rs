//! cellar CLI
//!
//! The command-line interface for managing a Brewfile manifest backed by a
//! local package metadata cache.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cellar_brew::ExpansionPolicy;
use cellar_manifest::EntryKind;

use cli::{Cli, Commands};
use commands::AddRequest;
use config::Config;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(manifest) = cli.manifest {
        config.manifest.path = manifest;
    }

    match cli.command {
        Some(cmd) => execute_command(&config, cmd),
        None => {
            println!("{} Brewfile manifest manager", "cellar".green().bold());
            println!();
            println!("Run {} for available commands.", "cellar --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(config: &Config, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Add {
            name,
            tap,
            brew,
            cask,
            mas,
            args,
            restart_service,
            mas_id,
            required,
            all,
            dry_run,
        } => {
            let kind = entry_kind(tap, brew, cask, mas)?;
            let request = AddRequest {
                name,
                kind,
                args,
                restart_service,
                mas_id,
                policy: expansion_policy(required, all),
                dry_run,
            };
            commands::run_add(config, &request)
        }
        Commands::Clean { dry_run } => commands::run_clean(config, dry_run),
        Commands::Refresh { snapshot } => {
            commands::run_refresh(config, snapshot.as_deref())
        }
    }
}

fn entry_kind(tap: bool, brew: bool, cask: bool, mas: bool) -> Result<EntryKind> {
    let kinds = [
        (tap, EntryKind::Tap),
        (brew, EntryKind::Brew),
        (cask, EntryKind::Cask),
        (mas, EntryKind::Mas),
    ];
    let mut selected = kinds.iter().filter(|(set, _)| *set).map(|(_, kind)| *kind);

    match (selected.next(), selected.next()) {
        (Some(kind), None) => Ok(kind),
        (None, _) => Err(CliError::user(
            "A package type must be specified. See 'cellar add --help'.",
        )),
        (Some(_), Some(_)) => Err(CliError::user(
            "Only one package type may be specified.",
        )),
    }
}

fn expansion_policy(required: bool, all: bool) -> ExpansionPolicy {
    if all {
        ExpansionPolicy::All
    } else if required {
        ExpansionPolicy::PackageAndRequired
    } else {
        ExpansionPolicy::PackageOnly
    }
}
