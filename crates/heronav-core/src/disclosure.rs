//! Open/closed state of the collapsed (mobile) menu panel

use crate::listeners::{ListenerSet, Subscription};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use tracing::debug;

/// Panel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn from_open(open: bool) -> Self {
        if open {
            PanelState::Open
        } else {
            PanelState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }

    /// Accessible label of the toggle control
    pub fn toggle_label(self) -> &'static str {
        match self {
            PanelState::Closed => "Open Menu",
            PanelState::Open => "Close Menu",
        }
    }

    /// `data-state` attribute value on the nav element
    pub fn data_state(self) -> Option<&'static str> {
        match self {
            PanelState::Closed => None,
            PanelState::Open => Some("active"),
        }
    }
}

/// Owns the panel state; `toggle` is the only transition
pub struct DisclosureController {
    state: Cell<PanelState>,
    listeners: ListenerSet<PanelState>,
}

impl DisclosureController {
    /// Starts closed
    pub fn new() -> Self {
        Self {
            state: Cell::new(PanelState::Closed),
            listeners: ListenerSet::new(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Flip the panel and notify watchers with the new state
    pub fn toggle(&self) -> PanelState {
        let next = self.state.get().toggled();
        self.state.set(next);
        debug!(state = ?next, "Menu panel toggled");
        self.listeners.emit(next);
        next
    }

    /// Current label of the toggle control
    pub fn toggle_label(&self) -> &'static str {
        self.state().toggle_label()
    }

    /// Observe state changes until the subscription is released
    pub fn watch(&self, on_change: impl Fn(PanelState) + 'static) -> Subscription {
        self.listeners.subscribe(on_change)
    }
}

impl Default for DisclosureController {
    fn default() -> Self {
        Self::new()
    }
}
