//! Command-line interface for kanboard
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::grouping::GroupingKey;
use crate::output::OutputOptions;
use crate::sorting::SortingKey;
use crate::storage::Storage;

mod avatar;
mod catalog;
mod prefs;
mod show;

/// kanboard - kanban board for remote tickets
///
/// Fetches tickets and users, groups them into columns by status, user or
/// priority, and orders each column by priority or title.
#[derive(Parser, Debug)]
#[command(name = "kanboard")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to kanboard.toml
    #[arg(long, global = true, env = "KANBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for preferences and the last-good board
    #[arg(long, global = true, env = "KANBOARD_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch tickets and show the board
    Show {
        /// Group columns by: status, user, priority (saved as the new preference)
        #[arg(long)]
        group_by: Option<GroupingKey>,

        /// Order tickets by: priority, title (saved as the new preference)
        #[arg(long)]
        order_by: Option<SortingKey>,

        /// Read the snapshot from a JSON file
        #[arg(long, conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Fetch the snapshot from this URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Saved grouping/ordering preference
    #[command(subcommand)]
    Prefs(PrefsCommands),

    /// Show avatar initials and color for user names
    Avatar {
        /// User names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List priority levels and known statuses
    Catalog,
}

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Show the saved preference
    Get,

    /// Save a new preference
    Set {
        /// status, user or priority
        #[arg(long)]
        grouping: Option<GroupingKey>,

        /// priority or title
        #[arg(long)]
        sorting: Option<SortingKey>,
    },

    /// Forget the saved preference
    Reset {
        /// Also delete the last saved board
        #[arg(long)]
        clear_cache: bool,
    },
}

/// Global settings shared by every command
pub struct Context {
    pub config: Config,
    pub output: OutputOptions,
    state_dir: Option<PathBuf>,
}

impl Context {
    pub fn resolve(
        config_path: Option<&Path>,
        state_dir: Option<PathBuf>,
        output: OutputOptions,
    ) -> Result<Self> {
        let config = Config::resolve(config_path)?;
        let state_dir = state_dir.or_else(|| config.state.dir.clone());
        Ok(Self {
            config,
            output,
            state_dir,
        })
    }

    pub fn storage(&self) -> Result<Storage> {
        Ok(Storage::resolve(self.state_dir.as_deref())?
            .with_lock_timeout(self.config.state.lock_timeout_ms))
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };
        let ctx = Context::resolve(self.config.as_deref(), self.state_dir, output)?;

        match self.command {
            Commands::Show {
                group_by,
                order_by,
                file,
                url,
            } => show::run(
                &ctx,
                show::ShowOptions {
                    group_by,
                    order_by,
                    file,
                    url,
                },
            ),
            Commands::Prefs(cmd) => match cmd {
                PrefsCommands::Get => prefs::run_get(&ctx),
                PrefsCommands::Set { grouping, sorting } => {
                    prefs::run_set(&ctx, prefs::SetOptions { grouping, sorting })
                }
                PrefsCommands::Reset { clear_cache } => prefs::run_reset(&ctx, clear_cache),
            },
            Commands::Avatar { names } => avatar::run(&ctx, &names),
            Commands::Catalog => catalog::run(&ctx),
        }
    }
}
