use std::{fmt, str::FromStr};

use crate::{
    foundation::core::{Rect, Viewport},
    foundation::error::{ScrollfxError, ScrollfxResult},
    signal::Signal,
};

/// Adjustment applied to the viewport before intersection tests, in px.
///
/// Positive values grow the viewport (elements count as visible earlier), negative values shrink
/// it. Written like a CSS margin: `"-100px"` or `"0px 0px -80px 0px"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Margin {
    /// Top adjustment.
    pub top: f64,
    /// Right adjustment.
    pub right: f64,
    /// Bottom adjustment.
    pub bottom: f64,
    /// Left adjustment.
    pub left: f64,
}

impl Margin {
    /// Same adjustment on every side.
    pub const fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    /// Grow (or shrink) `rect` by this margin.
    pub fn apply(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 - self.left,
            rect.y0 - self.top,
            rect.x1 + self.right,
            rect.y1 + self.bottom,
        )
    }
}

impl FromStr for Margin {
    type Err = ScrollfxError;

    fn from_str(s: &str) -> ScrollfxResult<Self> {
        let values = s
            .split_whitespace()
            .map(|tok| {
                let raw = tok.strip_suffix("px").unwrap_or(tok);
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ScrollfxError::validation(format!("invalid margin '{s}'")))
            })
            .collect::<ScrollfxResult<Vec<_>>>()?;

        match values.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(ScrollfxError::validation(format!(
                "margin '{s}' must have 1 to 4 values"
            ))),
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl TryFrom<String> for Margin {
    type Error = ScrollfxError;

    fn try_from(s: String) -> ScrollfxResult<Self> {
        s.parse()
    }
}

impl From<Margin> for String {
    fn from(m: Margin) -> Self {
        m.to_string()
    }
}

/// How much of the element must be inside the viewport to count as visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Amount {
    /// Any overlap.
    #[default]
    Some,
    /// The entire element.
    All,
    /// At least this fraction of the element's area.
    Fraction(f64),
}

/// Visibility trigger parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InViewOptions {
    /// Viewport adjustment.
    pub margin: Margin,
    /// Required overlap.
    pub amount: Amount,
    /// Latch to `true` after the first time the element becomes visible.
    pub once: bool,
}

impl InViewOptions {
    /// Check the overlap fraction.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if let Amount::Fraction(f) = self.amount
            && !(0.0..=1.0).contains(&f)
        {
            return Err(ScrollfxError::validation(
                "in-view amount fraction must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Fraction of `target`'s area that lies inside `root`, in `[0, 1]`.
///
/// Zero-area targets are either fully inside (1) or outside (0), edges inclusive.
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    let area = target.width().abs() * target.height().abs();
    let x0 = target.x0.max(root.x0);
    let y0 = target.y0.max(root.y0);
    let x1 = target.x1.min(root.x1);
    let y1 = target.y1.min(root.y1);

    if area <= 0.0 {
        let inside = x0 <= x1 && y0 <= y1;
        return if inside { 1.0 } else { 0.0 };
    }

    let w = (x1 - x0).max(0.0);
    let h = (y1 - y0).max(0.0);
    (w * h / area).clamp(0.0, 1.0)
}

/// Decide visibility of `target` inside the margin-adjusted viewport.
pub fn is_in_view(target: Rect, viewport: &Viewport, options: &InViewOptions) -> bool {
    let root = options.margin.apply(viewport.rect());
    let ratio = intersection_ratio(target, root);
    match options.amount {
        Amount::Some => ratio > 0.0,
        Amount::All => ratio >= 1.0,
        Amount::Fraction(f) => ratio > 0.0 && ratio >= f,
    }
}

/// Tracks one element's visibility and publishes it as a boolean signal.
#[derive(Clone, Debug)]
pub struct InViewTracker {
    options: InViewOptions,
    target: Rect,
    visible: Signal<bool>,
}

impl InViewTracker {
    /// Track `target`; starts not visible.
    pub fn new(target: Rect, options: InViewOptions) -> Self {
        Self {
            options,
            target,
            visible: Signal::new(false),
        }
    }

    /// Trigger parameters.
    pub fn options(&self) -> &InViewOptions {
        &self.options
    }

    /// Replace the tracked bounds, e.g. after a resize re-layout.
    pub fn set_target(&mut self, target: Rect) {
        self.target = target;
    }

    /// Observable visibility.
    pub fn signal(&self) -> &Signal<bool> {
        &self.visible
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Recompute against `viewport` and publish. Returns the new visibility.
    pub fn update(&self, viewport: &Viewport) -> bool {
        if self.options.once && self.visible.get() {
            return true;
        }
        let v = is_in_view(self.target, viewport, &self.options);
        self.visible.set(v);
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/visibility.rs"]
mod tests;
