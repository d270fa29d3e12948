use tracing::debug;

use super::types::{UiEvent, Verdict};
use crate::config::WatchConfig;
use crate::events;
use crate::gate::EventGate;
use crate::overlay::{HostActions, OverlayController, WindowSurface};
use crate::scanner::{self, DetectionPolicy};

/// The watch-and-react loop: gate, scan, toggle.
///
/// Single-threaded and synchronous; the host delivers one event at a time
/// and every event re-evaluates the overlay from scratch, so a failed
/// toggle heals on the next event.
pub struct Watcher<S, A>
where
    S: WindowSurface,
    A: HostActions,
{
    gate: EventGate,
    policy: DetectionPolicy,
    screen_height_px: u32,
    controller: OverlayController<S, A>,
    event_count: u64,
}

impl<S, A> Watcher<S, A>
where
    S: WindowSurface,
    A: HostActions,
{
    pub fn new(config: &WatchConfig, surface: S, actions: A) -> Self {
        let controller = OverlayController::new(surface, actions, config.layout_params());
        Self {
            gate: config.event_gate(),
            policy: config.detection_policy(),
            screen_height_px: config.screen.height_px,
            controller,
            event_count: 0,
        }
    }

    /// Assemble a watcher from explicit parts (tests, custom hosts)
    pub fn from_parts(
        gate: EventGate,
        policy: DetectionPolicy,
        screen_height_px: u32,
        controller: OverlayController<S, A>,
    ) -> Self {
        Self {
            gate,
            policy,
            screen_height_px,
            controller,
            event_count: 0,
        }
    }

    /// Service-connected entry point: reset counters and force a clean
    /// hidden overlay before the first event.
    pub fn init(&mut self) {
        self.event_count = 0;
        self.controller.teardown();
        events::log_service_started();
    }

    /// Process one inbound event and drive the overlay accordingly.
    ///
    /// Gate failure and a missing root are automatic non-matches; neither
    /// walks the tree. Never panics and never returns an error — a broken
    /// event must not take down the callback that receives all future ones.
    pub fn handle_event(&mut self, event: &UiEvent<'_>) -> Verdict {
        self.event_count += 1;
        events::log_event_processed(self.event_count, event.kind().as_str(), event.app_id());

        let gate_passed = self.gate.passes(event.app_id());
        let matched = if !gate_passed {
            debug!(event = "core.watch.gated_out", app_id = event.app_id());
            false
        } else {
            match event.root() {
                None => {
                    debug!(event = "core.watch.root_missing");
                    false
                }
                Some(root) => scanner::scan(root, &self.policy, self.screen_height_px),
            }
        };

        if matched {
            events::log_marker_found(event.app_id());
        }
        self.controller.notify(matched);

        Verdict::new(gate_passed, matched, self.controller.is_shown())
    }

    /// User activated the overlay's dismiss control
    pub fn dismiss(&mut self) {
        self.controller.dismiss();
    }

    /// Service destroyed/interrupted: unconditionally release the overlay
    pub fn teardown(&mut self) {
        self.controller.teardown();
        events::log_service_stopped(self.event_count);
    }

    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    pub fn policy(&self) -> &DetectionPolicy {
        &self.policy
    }

    pub fn controller(&self) -> &OverlayController<S, A> {
        &self.controller
    }
}
