//! Page chrome selection and the dark theme's side panel

use crate::theme::Theme;

/// Chrome arrangement around the page content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Docked side panel on wide viewports, overlay drawer on narrow ones
    Sidebar,
    /// Single centered column with a maximum width
    CenteredColumn,
    /// Full-width padded area
    FullBleed,
}

impl LayoutKind {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::Sidebar,
            Theme::Minimal => Self::CenteredColumn,
            Theme::Colorful => Self::FullBleed,
        }
    }

    #[must_use]
    pub const fn has_side_panel(self) -> bool {
        matches!(self, Self::Sidebar)
    }
}

/// Width class of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    /// `width` is in logical pixels; anything below `breakpoint_px` is narrow
    #[must_use]
    pub fn classify(width: f64, breakpoint_px: u32) -> Self {
        if width < f64::from(breakpoint_px) {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Open/closed state of the side panel.
///
/// The panel only opens as an overlay on narrow viewports. Any resize that
/// lands on a wide viewport closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidePanel {
    viewport: ViewportClass,
    open: bool,
}

impl SidePanel {
    #[must_use]
    pub fn new(width: f64, breakpoint_px: u32) -> Self {
        Self {
            viewport: ViewportClass::classify(width, breakpoint_px),
            open: false,
        }
    }

    #[must_use]
    pub const fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Docked panel is rendered beside the content
    #[must_use]
    pub const fn is_docked(&self) -> bool {
        matches!(self.viewport, ViewportClass::Wide)
    }

    /// Overlay panel and its backdrop are rendered
    #[must_use]
    pub const fn shows_overlay(&self) -> bool {
        self.open && matches!(self.viewport, ViewportClass::Narrow)
    }

    /// Re-classify after a resize. Returns whether anything changed.
    pub fn on_resize(&mut self, width: f64, breakpoint_px: u32) -> bool {
        let before = *self;
        self.viewport = ViewportClass::classify(width, breakpoint_px);
        if self.viewport == ViewportClass::Wide {
            self.open = false;
        }
        *self != before
    }

    pub fn open(&mut self) {
        if self.viewport == ViewportClass::Narrow {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
