use super::errors::SurfaceError;
use super::traits::{HostActions, WindowSurface};
use super::types::{LayoutParams, ViewHandle};

/// In-memory window surface for tests and offline replay.
///
/// Hands out sequential view handles and records attach/detach counts so
/// callers can assert idempotence.
#[derive(Debug, Default)]
pub struct SimulatedSurface {
    next_id: u64,
    attached: Vec<ViewHandle>,
    attach_count: u64,
    detach_count: u64,
}

impl SimulatedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Views currently attached to the surface
    pub fn attached(&self) -> &[ViewHandle] {
        &self.attached
    }

    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }

    pub fn detach_count(&self) -> u64 {
        self.detach_count
    }
}

impl WindowSurface for SimulatedSurface {
    fn attach(&mut self, _params: &LayoutParams) -> Result<ViewHandle, SurfaceError> {
        self.next_id += 1;
        let handle = ViewHandle::new(self.next_id);
        self.attached.push(handle);
        self.attach_count += 1;
        Ok(handle)
    }

    fn detach(&mut self, handle: ViewHandle) -> Result<(), SurfaceError> {
        let Some(position) = self.attached.iter().position(|h| *h == handle) else {
            return Err(SurfaceError::DetachFailed {
                handle_id: handle.id(),
                reason: "view not attached".to_string(),
            });
        };
        self.attached.remove(position);
        self.detach_count += 1;
        Ok(())
    }
}

/// Recording stand-in for host global actions
#[derive(Debug, Default)]
pub struct SimulatedActions {
    home_count: u64,
}

impl SimulatedActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn home_count(&self) -> u64 {
        self.home_count
    }
}

impl HostActions for SimulatedActions {
    fn navigate_home(&mut self) -> Result<(), SurfaceError> {
        self.home_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_surface_attach_detach() {
        let mut surface = SimulatedSurface::new();
        let handle = surface.attach(&LayoutParams::default()).unwrap();
        assert_eq!(surface.attached().len(), 1);
        assert_eq!(surface.attach_count(), 1);

        surface.detach(handle).unwrap();
        assert!(surface.attached().is_empty());
        assert_eq!(surface.detach_count(), 1);
    }

    #[test]
    fn test_simulated_surface_handles_are_unique() {
        let mut surface = SimulatedSurface::new();
        let first = surface.attach(&LayoutParams::default()).unwrap();
        let second = surface.attach(&LayoutParams::default()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_simulated_surface_detach_unknown_handle_fails() {
        let mut surface = SimulatedSurface::new();
        let result = surface.detach(ViewHandle::new(99));
        assert!(matches!(
            result,
            Err(SurfaceError::DetachFailed { handle_id: 99, .. })
        ));
        assert_eq!(surface.detach_count(), 0);
    }

    #[test]
    fn test_simulated_actions_counts_home() {
        let mut actions = SimulatedActions::new();
        actions.navigate_home().unwrap();
        actions.navigate_home().unwrap();
        assert_eq!(actions.home_count(), 2);
    }
}
