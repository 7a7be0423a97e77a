//! navweave CLI - turn flat CMS menu exports into navigation structures
//!
//! Usage: navweave <COMMAND>
//!
//! Commands:
//!   tree        Build the nested navigation tree
//!   mega        Group the menu into mega menu columns
//!   categories  List the category id to url path table
//!   roots       Show the leading root items of the desktop bar
//!   hover       Replay a pointer timeline through the hover panel

mod commands;
mod ui;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use navweave::presentation::{Cli, Commands};

use commands::Session;
use ui::json::emit_event;
use ui::json::events::CompleteEvent;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.name();
    let started = Instant::now();
    let result = run(&cli);
    let duration_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(()) => {
            if cli.json {
                let _ = emit_event(&CompleteEvent::success(command).with_duration(duration_ms));
            }
        }
        Err(err) => {
            ui::error::print_error(&err, cli.json, command);
            if cli.json {
                let _ = emit_event(&CompleteEvent::failure(command).with_duration(duration_ms));
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let session = Session::start(cli)?;

    match &cli.command {
        Commands::Tree {
            menu,
            categories,
            no_root,
            home,
        } => commands::tree::cmd_tree(&session, menu, categories.as_deref(), *no_root, home.clone()),
        Commands::Mega { menu, categories } => {
            commands::mega::cmd_mega(&session, menu, categories.as_deref())
        }
        Commands::Categories { categories } => {
            commands::categories::cmd_categories(&session, categories)
        }
        Commands::Roots {
            menu,
            categories,
            count,
        } => commands::roots::cmd_roots(&session, menu, categories.as_deref(), *count),
        Commands::Hover {
            script,
            empty,
            close_delay_ms,
        } => commands::hover::cmd_hover(&session, script, *empty, *close_delay_ms),
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` takes precedence
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "navweave=warn",
        1 => "navweave=info",
        2 => "navweave=debug",
        _ => "navweave=trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
