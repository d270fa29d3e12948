use tracing::{debug, info, warn};

use super::traits::{HostActions, WindowSurface};
use super::types::{LayoutParams, OverlayState, ViewHandle};

/// Two-state toggle that owns the overlay view.
///
/// `notify` drives the Hidden/Shown transitions idempotently; attach and
/// detach failures leave the state unchanged so the next inbound event
/// retries the toggle instead of crashing the event callback.
pub struct OverlayController<S, A>
where
    S: WindowSurface,
    A: HostActions,
{
    surface: S,
    actions: A,
    params: LayoutParams,
    state: OverlayState,
}

impl<S, A> OverlayController<S, A>
where
    S: WindowSurface,
    A: HostActions,
{
    pub fn new(surface: S, actions: A, params: LayoutParams) -> Self {
        Self {
            surface,
            actions,
            params,
            state: OverlayState::Hidden,
        }
    }

    /// React to a scan verdict.
    ///
    /// No-op when the verdict matches the current state: a second
    /// `notify(true)` never attaches a second view, a second `notify(false)`
    /// never detaches twice.
    pub fn notify(&mut self, match_found: bool) {
        match (match_found, self.state) {
            (true, OverlayState::Hidden) => self.show(),
            (false, OverlayState::Shown(handle)) => self.hide(handle),
            (true, OverlayState::Shown(_)) => {
                debug!(event = "core.overlay.already_shown");
            }
            (false, OverlayState::Hidden) => {}
        }
    }

    /// Dismiss-control action: hide the overlay, then send the user home.
    /// Both effects always run, in that order.
    pub fn dismiss(&mut self) {
        info!(event = "core.overlay.dismissed");
        if let OverlayState::Shown(handle) = self.state {
            self.hide(handle);
        }
        if let Err(e) = self.actions.navigate_home() {
            warn!(event = "core.overlay.navigate_home_failed", error = %e);
        }
    }

    /// Force-transition to Hidden, releasing any held view.
    ///
    /// Safe from any state including error/interrupt paths; the state goes
    /// to Hidden even when the host refuses the detach.
    pub fn teardown(&mut self) {
        if let OverlayState::Shown(handle) = self.state {
            if let Err(e) = self.surface.detach(handle) {
                warn!(event = "core.overlay.teardown_detach_failed", error = %e);
            }
            self.state = OverlayState::Hidden;
            info!(event = "core.overlay.torn_down", handle = handle.id());
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state.is_shown()
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    fn show(&mut self) {
        match self.surface.attach(&self.params) {
            Ok(handle) => {
                self.state = OverlayState::Shown(handle);
                info!(event = "core.overlay.shown", handle = handle.id());
            }
            Err(e) => {
                // Fatal to this toggle only; the next event retries
                warn!(event = "core.overlay.attach_failed", error = %e);
            }
        }
    }

    fn hide(&mut self, handle: ViewHandle) {
        match self.surface.detach(handle) {
            Ok(()) => {
                self.state = OverlayState::Hidden;
                info!(event = "core.overlay.hidden", handle = handle.id());
            }
            Err(e) => {
                warn!(event = "core.overlay.detach_failed", error = %e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::errors::SurfaceError;
    use crate::overlay::sim::{SimulatedActions, SimulatedSurface};

    fn controller() -> OverlayController<SimulatedSurface, SimulatedActions> {
        OverlayController::new(
            SimulatedSurface::new(),
            SimulatedActions::new(),
            LayoutParams::default(),
        )
    }

    #[test]
    fn test_starts_hidden() {
        let controller = controller();
        assert_eq!(controller.state(), OverlayState::Hidden);
        assert!(!controller.is_shown());
    }

    #[test]
    fn test_notify_true_shows_overlay() {
        let mut controller = controller();
        controller.notify(true);
        assert!(controller.is_shown());
        assert_eq!(controller.surface().attached().len(), 1);
    }

    #[test]
    fn test_notify_true_twice_attaches_once() {
        let mut controller = controller();
        controller.notify(true);
        controller.notify(true);
        assert_eq!(controller.surface().attach_count(), 1);
        assert_eq!(controller.surface().attached().len(), 1);
    }

    #[test]
    fn test_notify_false_hides_overlay() {
        let mut controller = controller();
        controller.notify(true);
        controller.notify(false);
        assert_eq!(controller.state(), OverlayState::Hidden);
        assert!(controller.surface().attached().is_empty());
    }

    #[test]
    fn test_notify_false_twice_detaches_zero_second_time() {
        let mut controller = controller();
        controller.notify(true);
        controller.notify(false);
        controller.notify(false);
        assert_eq!(controller.surface().detach_count(), 1);
    }

    #[test]
    fn test_notify_false_when_never_shown_is_noop() {
        let mut controller = controller();
        controller.notify(false);
        assert_eq!(controller.surface().detach_count(), 0);
        assert_eq!(controller.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_dismiss_hides_then_navigates_home() {
        let mut controller = controller();
        controller.notify(true);
        controller.dismiss();
        assert_eq!(controller.state(), OverlayState::Hidden);
        assert!(controller.surface().attached().is_empty());
        assert_eq!(controller.actions().home_count(), 1);
    }

    #[test]
    fn test_dismiss_when_hidden_still_navigates_home() {
        let mut controller = controller();
        controller.dismiss();
        assert_eq!(controller.actions().home_count(), 1);
        assert_eq!(controller.surface().detach_count(), 0);
    }

    #[test]
    fn test_teardown_from_shown_releases_view() {
        let mut controller = controller();
        controller.notify(true);
        controller.teardown();
        assert_eq!(controller.state(), OverlayState::Hidden);
        assert!(controller.surface().attached().is_empty());
    }

    #[test]
    fn test_teardown_from_hidden_is_noop() {
        let mut controller = controller();
        controller.teardown();
        controller.teardown();
        assert_eq!(controller.state(), OverlayState::Hidden);
        assert_eq!(controller.surface().detach_count(), 0);
    }

    #[test]
    fn test_show_again_after_hide_uses_fresh_handle() {
        let mut controller = controller();
        controller.notify(true);
        let OverlayState::Shown(first) = controller.state() else {
            panic!("Expected Shown");
        };
        controller.notify(false);
        controller.notify(true);
        let OverlayState::Shown(second) = controller.state() else {
            panic!("Expected Shown");
        };
        assert_ne!(first, second);
    }

    mod failing_surface {
        use super::*;

        /// Surface whose attach/detach can be made to fail
        #[derive(Default)]
        struct FlakySurface {
            inner: SimulatedSurface,
            fail_attach: bool,
            fail_detach: bool,
        }

        impl WindowSurface for FlakySurface {
            fn attach(&mut self, params: &LayoutParams) -> Result<ViewHandle, SurfaceError> {
                if self.fail_attach {
                    return Err(SurfaceError::AttachFailed {
                        reason: "host refused".to_string(),
                    });
                }
                self.inner.attach(params)
            }

            fn detach(&mut self, handle: ViewHandle) -> Result<(), SurfaceError> {
                if self.fail_detach {
                    return Err(SurfaceError::DetachFailed {
                        handle_id: handle.id(),
                        reason: "host refused".to_string(),
                    });
                }
                self.inner.detach(handle)
            }
        }

        #[test]
        fn test_attach_failure_leaves_state_hidden_and_retries() {
            let surface = FlakySurface {
                fail_attach: true,
                ..Default::default()
            };
            let mut controller =
                OverlayController::new(surface, SimulatedActions::new(), LayoutParams::default());

            controller.notify(true);
            assert_eq!(controller.state(), OverlayState::Hidden);

            // State stayed Hidden, so once the host recovers the same
            // notify(true) re-runs the attach
            let surface = FlakySurface::default();
            let mut controller =
                OverlayController::new(surface, SimulatedActions::new(), LayoutParams::default());
            controller.notify(true);
            assert!(controller.is_shown());
        }

        #[test]
        fn test_detach_failure_leaves_state_shown() {
            let surface = FlakySurface {
                fail_detach: true,
                ..Default::default()
            };
            let mut controller =
                OverlayController::new(surface, SimulatedActions::new(), LayoutParams::default());

            controller.notify(true);
            controller.notify(false);
            // Detach failed, so the controller still believes it is shown
            // and will retry the hide on the next non-match event.
            assert!(controller.is_shown());
        }

        #[test]
        fn test_teardown_forces_hidden_even_when_detach_fails() {
            let surface = FlakySurface {
                fail_detach: true,
                ..Default::default()
            };
            let mut controller =
                OverlayController::new(surface, SimulatedActions::new(), LayoutParams::default());

            controller.notify(true);
            controller.teardown();
            assert_eq!(controller.state(), OverlayState::Hidden);
        }
    }
}
