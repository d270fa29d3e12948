use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tree::UiNode;

/// Kind of UI-change event delivered by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    WindowContentChanged,
    WindowStateChanged,
    #[default]
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::WindowContentChanged => "window_content_changed",
            EventKind::WindowStateChanged => "window_state_changed",
            EventKind::Other => "other",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inbound UI-change event.
///
/// Borrows the host's snapshot root for the duration of the call; nothing
/// in the core keeps the reference past `handle_event`.
pub struct UiEvent<'a> {
    kind: EventKind,
    app_id: &'a str,
    root: Option<&'a dyn UiNode>,
}

impl<'a> UiEvent<'a> {
    pub fn new(kind: EventKind, app_id: &'a str, root: Option<&'a dyn UiNode>) -> Self {
        Self { kind, app_id, root }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn app_id(&self) -> &str {
        self.app_id
    }

    pub fn root(&self) -> Option<&'a dyn UiNode> {
        self.root
    }
}

impl fmt::Debug for UiEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiEvent")
            .field("kind", &self.kind)
            .field("app_id", &self.app_id)
            .field("has_root", &self.root.is_some())
            .finish()
    }
}

/// Outcome of processing one event, for observability and the CLI.
///
/// Computed fresh per event; the only retained state is the controller's
/// display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    gate_passed: bool,
    matched: bool,
    overlay_shown: bool,
}

impl Verdict {
    pub fn new(gate_passed: bool, matched: bool, overlay_shown: bool) -> Self {
        Self {
            gate_passed,
            matched,
            overlay_shown,
        }
    }

    pub fn gate_passed(&self) -> bool {
        self.gate_passed
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    pub fn overlay_shown(&self) -> bool {
        self.overlay_shown
    }
}
