//! Hover command handler

use std::time::Duration;

use anyhow::Result;

use navweave::application::HoverScript;

use super::Session;
use crate::ui::views::hover::HoverView;

pub fn cmd_hover(
    session: &Session,
    script: &str,
    empty: bool,
    close_delay_ms: Option<u64>,
) -> Result<()> {
    let script = HoverScript::parse(script)?;
    let delay = close_delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| session.config.close_delay());
    let transitions = script.replay(!empty, delay);

    let data = serde_json::json!({
        "close_delay_ms": delay.as_millis() as u64,
        "transitions": transitions,
    });
    session.finish(data, |ui| {
        HoverView::new(&transitions).render(ui.color, ui.unicode)
    })
}
