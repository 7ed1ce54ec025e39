// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal client for a headless-CMS event store: session login plus
//! event CRUD, as one-shot subcommands or an interactive single-page TUI.

mod cli;
mod config;
mod controller;
mod event_formatter;
mod session;
mod table;
mod tui;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use evman_client::{EventContent, EventId};
use tracing_subscriber::EnvFilter;

pub use crate::cli::{Cli, Commands};
pub use crate::config::{Config, parse_config};
pub use crate::controller::{Controller, EditCursor, Mode};
pub use crate::session::SessionStore;

use crate::event_formatter::EventFormatter;

/// Run the evman command-line interface.
pub async fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = parse_config(cli.config).await?;
    let sessions = SessionStore::open()?;
    let mut controller = Controller::new(&config, sessions)?;

    match cli.command {
        Some(Commands::Login {
            identifier,
            password,
        }) => {
            controller.login(&identifier, &password).await?;
            println!("{}", "Logged in successfully".green());
        }
        Some(Commands::Logout) => {
            controller.logout();
            println!("{}", "Logged out successfully".green());
        }
        Some(Commands::List { json }) => {
            controller.refresh().await?;
            let formatter = EventFormatter::new(json);
            print!("{}", formatter.format(controller.events()));
        }
        Some(Commands::New { name, description }) => {
            let event = create_event(&mut controller, name, description).await?;
            println!("{} {}", "Event created:".green(), event.name);
        }
        Some(Commands::Edit {
            id,
            name,
            description,
        }) => {
            let event = edit_event(&mut controller, id, name, description).await?;
            println!("{} {}", "Event updated:".green(), event.name);
        }
        Some(Commands::Rm { id }) => {
            controller.refresh().await?;
            controller.delete(EventId::new(id)).await?;
            println!("{}", "Event deleted".green());
        }
        Some(Commands::Tui) | None => {
            tui::run(&mut controller).await?;
        }
    }

    Ok(())
}

async fn create_event(
    controller: &mut Controller,
    name: String,
    description: Option<String>,
) -> Result<evman_client::Event, Box<dyn Error>> {
    controller.stage(EventContent::new(name, description.unwrap_or_default()));
    controller.submit().await
}

async fn edit_event(
    controller: &mut Controller,
    id: i64,
    name: Option<String>,
    description: Option<String>,
) -> Result<evman_client::Event, Box<dyn Error>> {
    // The cache must hold the event before an edit can be staged.
    controller.refresh().await?;
    controller.begin_edit(EventId::new(id))?;

    if let Some(name) = name {
        controller.set_name(name);
    }
    if let Some(description) = description {
        controller.set_description(description);
    }
    controller.submit().await
}
