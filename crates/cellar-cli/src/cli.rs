//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cellar - Manage a Brewfile manifest backed by a metadata cache
#[derive(Parser, Debug)]
#[command(name = "cellar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the Brewfile (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add an entry to the Brewfile
    ///
    /// The entry type must be specified with one of --tap, --brew, --cask,
    /// or --mas. Brew entries can carry install args and a service restart
    /// mode, and can pull in dependencies from the metadata cache.
    ///
    /// Examples:
    ///   cellar add -t homebrew/dupes
    ///   cellar add -b vim --args HEAD,with-override-system-vi
    ///   cellar add -b skhd --restart-service changed --required
    ///   cellar add -c macvim
    ///   cellar add -m Xcode -i 497799835
    Add {
        /// Name of the package to add
        name: String,

        /// Add a tap (user/repo)
        #[arg(short = 't', long)]
        tap: bool,

        /// Add a brew package
        #[arg(short = 'b', long)]
        brew: bool,

        /// Add a cask
        #[arg(short = 'c', long)]
        cask: bool,

        /// Add a mas app
        #[arg(short = 'm', long)]
        mas: bool,

        /// Args to use during installations and updates (comma-separated)
        #[arg(long, value_delimiter = ',')]
        args: Vec<String>,

        /// Service restart mode: always (every bundle run) or changed
        /// (after changes and updates)
        #[arg(long, value_name = "MODE")]
        restart_service: Option<String>,

        /// App store id, required for mas apps
        #[arg(short = 'i', long, value_name = "ID")]
        mas_id: Option<String>,

        /// Also add all required dependencies, transitively
        #[arg(short = 'r', long)]
        required: bool,

        /// Also add all required, recommended, optional, and build
        /// dependencies, transitively
        #[arg(short = 'a', long)]
        all: bool,

        /// Print the resulting Brewfile without writing it
        #[arg(short = 'd', long)]
        dry_run: bool,
    },

    /// Rewrite the Brewfile in canonical sorted form
    ///
    /// Verifies that every brew entry still has a cache record before
    /// writing anything.
    Clean {
        /// Print the resulting Brewfile without writing it
        #[arg(short = 'd', long)]
        dry_run: bool,
    },

    /// Refresh the metadata cache from the query command
    Refresh {
        /// Also save the raw query output to this path
        #[arg(long, value_name = "PATH")]
        snapshot: Option<PathBuf>,
    },
}
