use std::{fmt, str::FromStr};

use crate::foundation::error::{ScrollfxError, ScrollfxResult};

/// A point along one axis of a box: named edges, a fraction of the length, or a pixel distance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Edge {
    /// Leading edge (`0`).
    Start,
    /// Middle (`0.5`).
    Center,
    /// Trailing edge (`1`).
    End,
    /// Fraction of the box length (`"0.25"` or `"25%"`).
    Fraction(f64),
    /// Absolute distance from the leading edge (`"120px"`).
    Px(f64),
}

impl Edge {
    /// Distance of this point from the leading edge of a box of `length` px.
    pub fn resolve(self, length: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5 * length,
            Self::End => length,
            Self::Fraction(f) => f * length,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = ScrollfxError;

    fn from_str(s: &str) -> ScrollfxResult<Self> {
        let s = s.trim();
        let number = |raw: &str| -> ScrollfxResult<f64> {
            let v: f64 = raw
                .trim()
                .parse()
                .map_err(|_| ScrollfxError::validation(format!("invalid edge '{s}'")))?;
            if !v.is_finite() {
                return Err(ScrollfxError::validation(format!("invalid edge '{s}'")));
            }
            Ok(v)
        };

        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => {
                if let Some(px) = s.strip_suffix("px") {
                    Ok(Self::Px(number(px)?))
                } else if let Some(pct) = s.strip_suffix('%') {
                    Ok(Self::Fraction(number(pct)? / 100.0))
                } else {
                    Ok(Self::Fraction(number(s)?))
                }
            }
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

impl TryFrom<String> for Edge {
    type Error = ScrollfxError;

    fn try_from(s: String) -> ScrollfxResult<Self> {
        s.parse()
    }
}

impl From<Edge> for String {
    fn from(e: Edge) -> Self {
        e.to_string()
    }
}

/// "`<target edge> <container edge>`": the moment a point of the tracked element meets a point
/// of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OffsetPair {
    /// Point on the tracked element.
    pub target: Edge,
    /// Point on the viewport.
    pub container: Edge,
}

impl OffsetPair {
    /// Pair two edges.
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Scroll position (px) at which the two points coincide, for a target starting at
    /// `target_top` with `target_height`, inside a viewport of `viewport_height`.
    pub fn scroll_position(self, target_top: f64, target_height: f64, viewport_height: f64) -> f64 {
        target_top + self.target.resolve(target_height) - self.container.resolve(viewport_height)
    }
}

impl FromStr for OffsetPair {
    type Err = ScrollfxError;

    fn from_str(s: &str) -> ScrollfxResult<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [both] => {
                let e: Edge = both.parse()?;
                Ok(Self::new(e, e))
            }
            [target, container] => Ok(Self::new(target.parse()?, container.parse()?)),
            _ => Err(ScrollfxError::validation(format!(
                "scroll offset '{s}' must be '<target> <container>'"
            ))),
        }
    }
}

impl fmt::Display for OffsetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.container)
    }
}

impl TryFrom<String> for OffsetPair {
    type Error = ScrollfxError;

    fn try_from(s: String) -> ScrollfxResult<Self> {
        s.parse()
    }
}

impl From<OffsetPair> for String {
    fn from(p: OffsetPair) -> Self {
        p.to_string()
    }
}

/// Window of scroll positions over which progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<OffsetPair>", into = "Vec<OffsetPair>")]
pub struct ScrollOffset {
    /// Where progress is 0.
    pub start: OffsetPair,
    /// Where progress is 1.
    pub end: OffsetPair,
}

impl ScrollOffset {
    /// `["start end", "end start"]`: from the element entering at the bottom to leaving at the top.
    pub const ENTER_EXIT: Self = Self {
        start: OffsetPair::new(Edge::Start, Edge::End),
        end: OffsetPair::new(Edge::End, Edge::Start),
    };

    /// `["start start", "end start"]`: while the element scrolls out past the top.
    pub const EXIT: Self = Self {
        start: OffsetPair::new(Edge::Start, Edge::Start),
        end: OffsetPair::new(Edge::End, Edge::Start),
    };

    /// `["start end", "end end"]`: while the element scrolls in from the bottom.
    pub const ENTER: Self = Self {
        start: OffsetPair::new(Edge::Start, Edge::End),
        end: OffsetPair::new(Edge::End, Edge::End),
    };

    /// `["start start", "end end"]`: the whole scrollable range of a container.
    pub const CONTAIN: Self = Self {
        start: OffsetPair::new(Edge::Start, Edge::Start),
        end: OffsetPair::new(Edge::End, Edge::End),
    };

    /// Parse a pair of offsets.
    pub fn parse(start: &str, end: &str) -> ScrollfxResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::ENTER_EXIT
    }
}

impl TryFrom<Vec<OffsetPair>> for ScrollOffset {
    type Error = ScrollfxError;

    fn try_from(v: Vec<OffsetPair>) -> ScrollfxResult<Self> {
        match v.as_slice() {
            [start, end] => Ok(Self {
                start: *start,
                end: *end,
            }),
            _ => Err(ScrollfxError::validation(format!(
                "scroll offset needs exactly two entries, got {}",
                v.len()
            ))),
        }
    }
}

impl From<ScrollOffset> for Vec<OffsetPair> {
    fn from(o: ScrollOffset) -> Self {
        vec![o.start, o.end]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
