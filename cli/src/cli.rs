// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "evman", version, about = "Manage events in a headless CMS store")]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        long_help = "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/evman/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/evman/config.toml on Windows."
    )]
    pub config: Option<PathBuf>,

    /// The command to execute; opens the interactive view when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in to the store and persist the session token
    Login {
        /// Username or email
        identifier: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Clear the persisted session token
    Logout,

    /// List all events in store order
    #[command(alias = "ls")]
    List {
        /// Print the raw event records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new event
    #[command(alias = "add")]
    New {
        /// Event name
        name: String,

        /// Event description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Update an existing event
    Edit {
        /// Store-assigned event id
        id: i64,

        /// New event name
        #[arg(long)]
        name: Option<String>,

        /// New event description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an event
    #[command(alias = "delete")]
    Rm {
        /// Store-assigned event id
        id: i64,
    },

    /// Open the interactive single-page view
    Tui,
}
