use serde::{Deserialize, Serialize};

/// Width or height request for the overlay window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Size to the overlay's content
    FitContent,
    /// Fixed pixel box
    Fixed(u32),
}

/// Window class requested from the host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// Overlay-class window on capable hosts
    Overlay,
    /// Legacy fallback for hosts without the overlay class
    LegacyPhone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    Translucent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    Center,
}

/// Parameters handed to the host when attaching the overlay view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    width: Dimension,
    height: Dimension,
    kind: WindowKind,
    focusable: bool,
    screen_space: bool,
    pixel_format: PixelFormat,
    gravity: Gravity,
}

impl LayoutParams {
    /// Fixed-size centered translucent overlay, the recommended default
    pub fn fixed(width_px: u32, height_px: u32) -> Self {
        Self {
            width: Dimension::Fixed(width_px),
            height: Dimension::Fixed(height_px),
            kind: WindowKind::Overlay,
            focusable: false,
            screen_space: true,
            pixel_format: PixelFormat::Translucent,
            gravity: Gravity::Center,
        }
    }

    /// Content-sized variant of the default overlay
    pub fn fit_content() -> Self {
        Self {
            width: Dimension::FitContent,
            height: Dimension::FitContent,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: WindowKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn width(&self) -> Dimension {
        self.width
    }
    pub fn height(&self) -> Dimension {
        self.height
    }
    pub fn kind(&self) -> WindowKind {
        self.kind
    }
    pub fn focusable(&self) -> bool {
        self.focusable
    }
    pub fn screen_space(&self) -> bool {
        self.screen_space
    }
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::fixed(900, 600)
    }
}

/// Opaque id for a view attached to the host's window surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewHandle(u64);

impl ViewHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Display state of the overlay.
///
/// `Shown` owns the single live view handle; at most one overlay view is
/// attached to the host surface at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Shown(ViewHandle),
}

impl OverlayState {
    pub fn is_shown(&self) -> bool {
        matches!(self, OverlayState::Shown(_))
    }
}
