//! Core types used throughout the project.

/// A point in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Vertical layout of an element relative to the document (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Layout {
    pub top: i32,
    pub height: i32,
}

/// A page section as seen by the scroll navigator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionBox {
    pub id: String,
    pub layout: Layout,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: i32, height: i32) -> Self {
        Self { id: id.into(), layout: Layout { top, height } }
    }

    /// Checks if `scroll_y` falls inside this section's activation window.
    ///
    /// The window is `[top - offset, top - offset + height)`. `scroll_y` may be fractional.
    #[must_use]
    pub fn contains(&self, scroll_y: f64, offset: i32) -> bool {
        let start = self.layout.top.saturating_sub(offset);
        let end = start.saturating_add(self.layout.height);
        scroll_y >= f64::from(start) && scroll_y < f64::from(end)
    }
}
