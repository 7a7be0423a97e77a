//! Command handlers
//!
//! Each handler builds its output through the library and hands it to the
//! session, which prints the text view or emits a `result` event.

pub mod categories;
pub mod hover;
pub mod mega;
pub mod roots;
pub mod tree;

use anyhow::Result;
use serde::Serialize;

use navweave::config::{load_layered, Config, ConfigWarning};
use navweave::presentation::Cli;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ResultEvent, StartEvent, WarningEvent};
use crate::ui::views::config_warnings::{config_warning_message, render_config_warning};

/// Per-invocation state shared by the handlers
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
    command: &'static str,
}

impl Session {
    /// Load config, announce the command and report config warnings
    pub fn start(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, warnings) = load_layered(cli.config.as_deref(), Some(&cwd))?;
        let ui = UiContext::new(cli.json, cli.color, &config);

        let session = Self {
            config,
            ui,
            command: cli.command.name(),
        };
        if session.ui.json {
            emit_event(&StartEvent::new(session.command))?;
        }
        session.report_warnings(&warnings)?;
        Ok(session)
    }

    fn report_warnings(&self, warnings: &[ConfigWarning]) -> Result<()> {
        for warning in warnings {
            if self.ui.json {
                emit_event(&WarningEvent::new(
                    self.command,
                    config_warning_message(warning),
                ))?;
            } else {
                eprint!(
                    "{}",
                    render_config_warning(warning, self.ui.color, self.ui.unicode)
                );
            }
        }
        Ok(())
    }

    /// Emit `data` as a result event, or print the rendered text view
    pub fn finish<T: Serialize>(&self, data: T, text: impl FnOnce(&UiContext) -> String) -> Result<()> {
        if self.ui.json {
            emit_event(&ResultEvent::new(self.command, data))?;
        } else {
            print!("{}", text(&self.ui));
        }
        Ok(())
    }
}
