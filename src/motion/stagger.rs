use crate::foundation::error::{ScrollfxError, ScrollfxResult};

/// Order in which children receive increasing delays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerDirection {
    /// First child starts first.
    #[default]
    Forward,
    /// Last child starts first.
    Reverse,
}

/// Per-child start offsets for a list of animated children.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Stagger {
    /// Parent-level delay before the first child starts (seconds).
    pub delay_children: f64,
    /// Delay added per child index (seconds).
    pub stagger_children: f64,
    /// Which end of the list starts first.
    pub direction: StaggerDirection,
}

impl Stagger {
    /// Forward stagger.
    pub fn new(delay_children: f64, stagger_children: f64) -> Self {
        Self {
            delay_children,
            stagger_children,
            direction: StaggerDirection::Forward,
        }
    }

    /// Same stagger counting from the end of the list.
    pub fn reversed(self) -> Self {
        Self {
            direction: StaggerDirection::Reverse,
            ..self
        }
    }

    /// Check that delays are finite and non-negative.
    pub fn validate(&self) -> ScrollfxResult<()> {
        for (name, v) in [
            ("delay_children", self.delay_children),
            ("stagger_children", self.stagger_children),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScrollfxError::validation(format!(
                    "stagger {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Start delay of child `index` in a list of `count` children.
    ///
    /// Forward: `delay_children + index * stagger_children`.
    pub fn delay_for(&self, index: usize, count: usize) -> f64 {
        let slot = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => count.saturating_sub(1).saturating_sub(index),
        };
        self.delay_children + slot as f64 * self.stagger_children
    }

    /// Start delays for all `count` children, in list order.
    pub fn schedule(&self, count: usize) -> Vec<f64> {
        (0..count).map(|i| self.delay_for(i, count)).collect()
    }
}

/// `base + i * step` for `i in 0..count`.
pub fn linear_series(base: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| base + i as f64 * step).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/motion/stagger.rs"]
mod tests;
