use crate::foundation::error::{ScrollfxError, ScrollfxResult};

pub use kurbo::{Rect, Size, Vec2};

/// Visible rendering area, positioned in document space by its scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in px.
    pub width: f64,
    /// Viewport height in px.
    pub height: f64,
    /// Vertical scroll offset of the document in px.
    pub scroll_y: f64,
}

impl Viewport {
    /// Build a viewport scrolled to the top of the document.
    pub fn new(width: f64, height: f64) -> ScrollfxResult<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(ScrollfxError::validation(
                "viewport width and height must be finite and > 0",
            ));
        }
        Ok(Self {
            width,
            height,
            scroll_y: 0.0,
        })
    }

    /// Same viewport at another scroll offset.
    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }

    /// Viewport size.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Visible area in document coordinates (y grows downward).
    pub fn rect(self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.scroll_y + self.height)
    }
}

/// Host refresh rate as a rational number of frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> ScrollfxResult<Self> {
        if den == 0 {
            return Err(ScrollfxError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ScrollfxError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Wall time covered by `frames` frames.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
