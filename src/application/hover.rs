//! Hover script replay
//!
//! Feeds a scripted pointer timeline through a [`HoverPanel`] and records the
//! resulting transitions. Scripts look like `enter@0,leave@40,enter@100,tick@400`
//! with times in milliseconds from the start.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::domain::services::{HoverPanel, PanelEvent, PanelState};
use crate::error::{NavError, NavResult};

/// Latest time a script step may use (one hour)
pub const MAX_SCRIPT_MS: u64 = 3_600_000;

/// One scripted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStep {
    pub event: PanelEvent,
    pub at_ms: u64,
}

/// A parsed script; steps are in non-decreasing time order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverScript {
    steps: Vec<HoverStep>,
}

/// A recorded step and the state change it caused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverTransition {
    pub at_ms: u64,
    pub event: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    /// Pending close deadline after the step, in script time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_at_ms: Option<u64>,
    /// Inserted by the replay rather than written in the script
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub implicit: bool,
}

impl HoverScript {
    /// Parse a comma-separated `event@ms` list; empty steps are ignored
    pub fn parse(script: &str) -> NavResult<Self> {
        let mut steps: Vec<HoverStep> = Vec::new();

        for raw in script.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let step = parse_step(raw)?;
            if let Some(last) = steps.last() {
                if step.at_ms < last.at_ms {
                    return Err(script_error(
                        raw,
                        format!("time {}ms is before the previous step at {}ms", step.at_ms, last.at_ms),
                    ));
                }
            }
            steps.push(step);
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[HoverStep] {
        &self.steps
    }

    /// Replay against a fresh panel.
    ///
    /// Before each pointer event the clock is advanced to the event time, so an
    /// expired close fires before the pointer comes back. Such implicit ticks
    /// are only recorded when they change the state.
    pub fn replay(&self, has_content: bool, close_delay: Duration) -> Vec<HoverTransition> {
        let start = Instant::now();
        let mut panel = HoverPanel::new(has_content).with_close_delay(close_delay);
        let mut transitions = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let now = start + Duration::from_millis(step.at_ms);

            if step.event != PanelEvent::Tick {
                let before = panel.state();
                let after = panel.handle(PanelEvent::Tick, now);
                if before != after {
                    transitions.push(record(step.at_ms, PanelEvent::Tick, before, after, start, true));
                }
            }

            let before = panel.state();
            let after = panel.handle(step.event, now);
            transitions.push(record(step.at_ms, step.event, before, after, start, false));
        }

        transitions
    }
}

fn record(
    at_ms: u64,
    event: PanelEvent,
    from: PanelState,
    to: PanelState,
    start: Instant,
    implicit: bool,
) -> HoverTransition {
    let close_at_ms = match to {
        PanelState::ClosingDelayed { deadline } => {
            Some(deadline.duration_since(start).as_millis() as u64)
        }
        _ => None,
    };
    HoverTransition {
        at_ms,
        event: event.name(),
        from: from.name(),
        to: to.name(),
        close_at_ms,
        implicit,
    }
}

fn parse_step(raw: &str) -> NavResult<HoverStep> {
    let (name, time) = raw
        .split_once('@')
        .ok_or_else(|| script_error(raw, "expected <event>@<ms>"))?;

    let event = match name.trim().to_lowercase().as_str() {
        "enter" => PanelEvent::PointerEnter,
        "leave" => PanelEvent::PointerLeave,
        "tick" => PanelEvent::Tick,
        other => return Err(script_error(raw, format!("unknown event '{}'", other))),
    };
    let at_ms: u64 = time
        .trim()
        .parse()
        .map_err(|_| script_error(raw, format!("invalid time '{}'", time.trim())))?;
    if at_ms > MAX_SCRIPT_MS {
        return Err(script_error(
            raw,
            format!("time {}ms is past the {}ms limit", at_ms, MAX_SCRIPT_MS),
        ));
    }

    Ok(HoverStep { event, at_ms })
}

fn script_error(step: &str, message: impl Into<String>) -> NavError {
    NavError::InvalidHoverScript {
        step: step.to_string(),
        message: message.into(),
    }
}
