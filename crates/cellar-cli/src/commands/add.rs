//! Add command implementation
//!
//! Adds one entry to the Brewfile. Brew entries go through the dependency
//! resolver; taps, casks, and mas apps are appended directly. Any
//! resolution error aborts before the manifest is touched.

use colored::Colorize;

use cellar_brew::{CacheMap, Entry, ExpansionPolicy, RestartService, SqliteStore};
use cellar_manifest::{is_valid_tap, parse_brew_lines, Brewfile, EntryKind};

use crate::config::Config;
use crate::error::{CliError, Result};

/// Everything the add command needs, validated from CLI flags.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub name: String,
    pub kind: EntryKind,
    pub args: Vec<String>,
    pub restart_service: Option<String>,
    pub mas_id: Option<String>,
    pub policy: ExpansionPolicy,
    pub dry_run: bool,
}

/// Run the add command
pub fn run_add(config: &Config, request: &AddRequest) -> Result<()> {
    let manifest_path = &config.manifest.path;
    let mut file = Brewfile::load(manifest_path)?;

    if file.contains(request.kind, &request.name) {
        return Err(CliError::user(format!(
            "{} '{}' is already in the Brewfile.",
            request.kind, request.name
        )));
    }

    match request.kind {
        EntryKind::Tap => {
            if !is_valid_tap(&request.name) {
                return Err(CliError::user(
                    "Unrecognized tap format. Use the format 'user/repo'.",
                ));
            }
            file.push(EntryKind::Tap, EntryKind::Tap.base_entry(&request.name));
        }
        EntryKind::Brew => {
            file.brew = resolve_brew_lines(config, request, &file)?;
        }
        EntryKind::Cask => {
            file.push(EntryKind::Cask, EntryKind::Cask.base_entry(&request.name));
        }
        EntryKind::Mas => {
            let id = request.mas_id.as_deref().ok_or_else(|| {
                CliError::user(format!(
                    "An id is required for mas apps. Get the id with 'mas search {}' and try again.",
                    request.name
                ))
            })?;
            file.push(
                EntryKind::Mas,
                format!("{}, id: {}", EntryKind::Mas.base_entry(&request.name), id),
            );
        }
    }

    if request.dry_run {
        println!("{}", file.render());
    } else {
        file.write(manifest_path)?;
        println!(
            "{} Added {} {} to {}.",
            "OK".green().bold(),
            request.kind,
            request.name.cyan(),
            manifest_path.display()
        );
    }

    Ok(())
}

/// Resolve the requested brew entry plus its dependency closure into the
/// replacement brew section.
fn resolve_brew_lines(
    config: &Config,
    request: &AddRequest,
    file: &Brewfile,
) -> Result<Vec<String>> {
    let restart = match request.restart_service.as_deref() {
        Some(value) => Some(RestartService::parse(value).ok_or_else(|| {
            CliError::user(
                "Valid options for the --restart-service flag are 'always' and 'changed'.",
            )
        })?),
        None => None,
    };

    let store = SqliteStore::open(&config.cache.path)?;
    let mut map = CacheMap::from_entries(&store, parse_brew_lines(&file.brew));
    map.add(
        Entry::new(request.name.clone(), restart, request.args.clone()),
        request.policy,
    )?;

    Ok(map.lines())
}
