//! Hover panel state machine
//!
//! Drives the open/close behavior of one mega menu panel. Leaving the trigger
//! does not close the panel immediately; a delayed close is scheduled so the
//! pointer can cross the gap between trigger and panel. Entering again before
//! the deadline cancels it.
//!
//! Time is passed in by the caller, which keeps the machine deterministic.

use std::fmt;
use std::time::{Duration, Instant};

/// Default delay before a left panel closes
pub const CLOSE_DELAY_MS: u64 = 150;

/// Visible state of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    /// Pointer entered; panel opens on the next tick
    OpeningHover,
    Open,
    /// Pointer left; panel stays visible until the deadline
    ClosingDelayed { deadline: Instant },
}

impl PanelState {
    pub fn name(&self) -> &'static str {
        match self {
            PanelState::Closed => "closed",
            PanelState::OpeningHover => "opening",
            PanelState::Open => "open",
            PanelState::ClosingDelayed { .. } => "closing",
        }
    }

    /// Whether the panel is on screen
    pub fn is_visible(&self) -> bool {
        !matches!(self, PanelState::Closed)
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Pointer entered the trigger or the panel
    PointerEnter,
    /// Pointer left the trigger or the panel
    PointerLeave,
    /// Clock advanced
    Tick,
}

impl PanelEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PanelEvent::PointerEnter => "enter",
            PanelEvent::PointerLeave => "leave",
            PanelEvent::Tick => "tick",
        }
    }
}

/// One panel and its single pending close, if any
#[derive(Debug, Clone)]
pub struct HoverPanel {
    state: PanelState,
    close_delay: Duration,
    has_content: bool,
}

impl HoverPanel {
    /// A panel with nothing to show never opens
    pub fn new(has_content: bool) -> Self {
        Self {
            state: PanelState::Closed,
            close_delay: Duration::from_millis(CLOSE_DELAY_MS),
            has_content,
        }
    }

    pub fn with_close_delay(mut self, close_delay: Duration) -> Self {
        self.close_delay = close_delay;
        self
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Deadline of the pending close
    pub fn pending_close(&self) -> Option<Instant> {
        match self.state {
            PanelState::ClosingDelayed { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Apply an event at `now`, returning the new state
    pub fn handle(&mut self, event: PanelEvent, now: Instant) -> PanelState {
        match event {
            PanelEvent::PointerEnter => self.pointer_enter(),
            PanelEvent::PointerLeave => self.pointer_leave(now),
            PanelEvent::Tick => self.tick(now),
        }
        self.state
    }

    fn pointer_enter(&mut self) {
        if !self.has_content {
            return;
        }
        self.state = match self.state {
            PanelState::Closed => PanelState::OpeningHover,
            // cancels the pending close; the panel never left the screen
            PanelState::ClosingDelayed { .. } => PanelState::Open,
            other => other,
        };
    }

    fn pointer_leave(&mut self, now: Instant) {
        if self.state == PanelState::Closed {
            return;
        }
        // replaces any earlier deadline: one timer per panel
        self.state = match now.checked_add(self.close_delay) {
            Some(deadline) => PanelState::ClosingDelayed { deadline },
            None => {
                tracing::warn!(
                    close_delay_ms = self.close_delay.as_millis() as u64,
                    "close delay is out of range, keeping the panel open"
                );
                PanelState::Open
            }
        };
    }

    fn tick(&mut self, now: Instant) {
        self.state = match self.state {
            PanelState::OpeningHover => PanelState::Open,
            PanelState::ClosingDelayed { deadline } if now >= deadline => PanelState::Closed,
            other => other,
        };
    }
}
