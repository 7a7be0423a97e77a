//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Flags override config values, which override built-in defaults

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// navweave - turn flat CMS menu exports into navigation structures
#[derive(Parser, Debug)]
#[command(name = "navweave")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./navweave.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the nested navigation tree
    Tree {
        /// Flat menu export (JSON)
        #[arg(short, long, value_name = "FILE")]
        menu: PathBuf,

        /// Category tree export (JSON), used to resolve category links
        #[arg(short, long, value_name = "FILE")]
        categories: Option<PathBuf>,

        /// Drop the root level and list the roots' children instead
        #[arg(long)]
        no_root: bool,

        /// Prepend a home link with this label
        #[arg(long, value_name = "LABEL")]
        home: Option<String>,
    },

    /// Group the menu into mega menu columns
    Mega {
        /// Flat menu export (JSON)
        #[arg(short, long, value_name = "FILE")]
        menu: PathBuf,

        /// Category tree export (JSON), used to resolve category links
        #[arg(short, long, value_name = "FILE")]
        categories: Option<PathBuf>,
    },

    /// List the category id to url path table
    Categories {
        /// Category tree export (JSON)
        #[arg(short, long, value_name = "FILE")]
        categories: PathBuf,
    },

    /// Show the leading root items of the desktop bar
    Roots {
        /// Flat menu export (JSON)
        #[arg(short, long, value_name = "FILE")]
        menu: PathBuf,

        /// Category tree export (JSON), used to resolve category links
        #[arg(short, long, value_name = "FILE")]
        categories: Option<PathBuf>,

        /// Number of roots (default from config, 2)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Replay a pointer timeline through the hover panel state machine
    Hover {
        /// Comma-separated steps, e.g. "enter@0,leave@40,enter@100,tick@400"
        #[arg(short, long)]
        script: String,

        /// Replay against a panel without children
        #[arg(long)]
        empty: bool,

        /// Close delay in milliseconds (default from config, 150)
        #[arg(long, value_name = "MS")]
        close_delay_ms: Option<u64>,
    },
}

impl Commands {
    /// Subcommand name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Tree { .. } => "tree",
            Commands::Mega { .. } => "mega",
            Commands::Categories { .. } => "categories",
            Commands::Roots { .. } => "roots",
            Commands::Hover { .. } => "hover",
        }
    }
}
