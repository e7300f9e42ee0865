use crate::{
    foundation::core::{Rect, Viewport},
    scroll::offset::ScrollOffset,
    signal::Signal,
};

/// Region whose travel through the viewport is measured.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ScrollTarget {
    /// The whole document; progress runs over its scrollable range.
    Page {
        /// Total document height in px.
        content_height: f64,
    },
    /// An element with document-space bounds.
    Element(Rect),
}

impl ScrollTarget {
    fn span(self) -> (f64, f64) {
        match self {
            Self::Page { content_height } => (0.0, content_height),
            Self::Element(r) => (r.y0, r.height()),
        }
    }
}

/// Scroll positions `(start, end)` at which progress is 0 and 1.
pub fn scroll_window(target: ScrollTarget, viewport_height: f64, offset: ScrollOffset) -> (f64, f64) {
    let (top, height) = target.span();
    (
        offset.start.scroll_position(top, height, viewport_height),
        offset.end.scroll_position(top, height, viewport_height),
    )
}

/// Normalized travel of `target` through the viewport, in `[0, 1]`.
///
/// Before the window opens this is 0 and after it closes it is 1. A zero-length window acts as a
/// step at its position. Non-finite scroll offsets count as the top of the document.
pub fn scroll_progress(target: ScrollTarget, viewport: &Viewport, offset: ScrollOffset) -> f64 {
    let (start, end) = scroll_window(target, viewport.height, offset);
    let y = if viewport.scroll_y.is_finite() {
        viewport.scroll_y
    } else {
        0.0
    };

    let span = end - start;
    if !span.is_finite() {
        return 0.0;
    }
    if span.abs() < f64::EPSILON {
        return if y >= end { 1.0 } else { 0.0 };
    }
    ((y - start) / span).clamp(0.0, 1.0)
}

/// Tracks one region and publishes its progress on every scroll/resize.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    target: ScrollTarget,
    offset: ScrollOffset,
    progress: Signal<f64>,
}

impl ScrollTracker {
    /// Track the whole page over its scrollable range.
    pub fn page(content_height: f64) -> Self {
        Self::new(
            ScrollTarget::Page { content_height },
            ScrollOffset::CONTAIN,
        )
    }

    /// Track `target` over the window described by `offset`.
    pub fn new(target: ScrollTarget, offset: ScrollOffset) -> Self {
        Self {
            target,
            offset,
            progress: Signal::new(0.0),
        }
    }

    /// Tracked region.
    pub fn target(&self) -> ScrollTarget {
        self.target
    }

    /// Replace the tracked region, e.g. after a resize re-layout.
    pub fn set_target(&mut self, target: ScrollTarget) {
        self.target = target;
    }

    /// Trigger window.
    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Observable progress.
    pub fn signal(&self) -> &Signal<f64> {
        &self.progress
    }

    /// Current progress.
    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    /// Recompute from the viewport and publish. Returns the new progress.
    pub fn update(&self, viewport: &Viewport) -> f64 {
        let p = scroll_progress(self.target, viewport, self.offset);
        self.progress.set(p);
        p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
