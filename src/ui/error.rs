use navweave::NavError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// Stable machine-readable code for an error
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<NavError>() {
        Some(NavError::InvalidPayload { .. }) => "INVALID_PAYLOAD",
        Some(NavError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(NavError::InvalidHoverScript { .. }) => "INVALID_HOVER_SCRIPT",
        Some(NavError::TreeTooDeep { .. }) => "TREE_TOO_DEEP",
        Some(NavError::Io(_)) => "IO",
        None => "ERROR",
    }
}

fn error_help(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<NavError>()? {
        NavError::InvalidPayload { .. } => {
            Some("Expected a JSON array or an object with an `items` array.")
        }
        NavError::InvalidConfig { .. } => Some("Fix the TOML and try again."),
        NavError::InvalidHoverScript { .. } => {
            Some("Steps look like enter@0,leave@40,tick@200 (times in ms, non-decreasing).")
        }
        NavError::TreeTooDeep { .. } => {
            Some("Check the menu export for a runaway parent chain.")
        }
        NavError::Io(_) => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );
    if let Some(help) = error_help(err) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(help).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool, command: &str) {
    if json {
        let mut event = ErrorEvent::new(command, error_code(err), err.to_string());
        if let Some(help) = error_help(err) {
            event = event.with_help(help);
        }
        let _ = emit_event(&event);
        return;
    }

    let caps = detect_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}
