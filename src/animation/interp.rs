use crate::{
    animation::ease::Ease,
    foundation::core::Vec2,
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// Linear blend between two values of the same type.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t` (`t` is not clamped).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Piecewise mapping from an input signal (usually scroll progress) to output values.
///
/// Breakpoints must be finite and non-decreasing, and there must be exactly one output per
/// breakpoint. Between two breakpoints the output is linearly interpolated, optionally eased per
/// segment. Outside the breakpoint range the output is clamped to the first/last value unless the
/// mapping is built with [`Interpolator::unclamped`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Interpolator<T> {
    breakpoints: Vec<f64>,
    outputs: Vec<T>,
    #[serde(default)]
    eases: Vec<Ease>, // one per segment, empty = linear
    #[serde(default = "default_clamp")]
    clamp: bool,
}

fn default_clamp() -> bool {
    true
}

impl<T> Interpolator<T>
where
    T: Lerp + Clone,
{
    /// Build a validated mapping.
    pub fn new(breakpoints: Vec<f64>, outputs: Vec<T>) -> ScrollfxResult<Self> {
        let out = Self {
            breakpoints,
            outputs,
            eases: Vec::new(),
            clamp: true,
        };
        out.validate()?;
        Ok(out)
    }

    // For built-in tables that are known to be well formed.
    pub(crate) fn new_unchecked(breakpoints: Vec<f64>, outputs: Vec<T>) -> Self {
        debug_assert_eq!(breakpoints.len(), outputs.len());
        Self {
            breakpoints,
            outputs,
            eases: Vec::new(),
            clamp: true,
        }
    }

    /// Mapping that returns `value` for every input.
    pub fn constant(value: T) -> Self {
        Self {
            breakpoints: vec![0.0],
            outputs: vec![value],
            eases: Vec::new(),
            clamp: true,
        }
    }

    /// Apply the same easing curve to every segment.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.eases = vec![ease; self.segment_count()];
        self
    }

    /// Apply one easing curve per segment (`breakpoints.len() - 1` entries).
    pub fn with_segment_eases(mut self, eases: Vec<Ease>) -> ScrollfxResult<Self> {
        self.eases = eases;
        self.validate()?;
        Ok(self)
    }

    /// Extrapolate beyond the breakpoint range using the end segments.
    pub fn unclamped(mut self) -> Self {
        self.clamp = false;
        self
    }

    /// Input breakpoints.
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Output values, one per breakpoint.
    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    fn segment_count(&self) -> usize {
        self.breakpoints.len().saturating_sub(1)
    }

    /// Check the structural invariants. Deserialized mappings should be validated before use.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.breakpoints.is_empty() {
            return Err(ScrollfxError::validation(
                "interpolation needs at least one breakpoint",
            ));
        }
        if self.breakpoints.len() != self.outputs.len() {
            return Err(ScrollfxError::validation(format!(
                "interpolation has {} breakpoints but {} outputs",
                self.breakpoints.len(),
                self.outputs.len()
            )));
        }
        if self.breakpoints.iter().any(|b| !b.is_finite()) {
            return Err(ScrollfxError::validation(
                "interpolation breakpoints must be finite",
            ));
        }
        if !self.breakpoints.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ScrollfxError::validation(
                "interpolation breakpoints must be non-decreasing",
            ));
        }
        if !self.eases.is_empty() && self.eases.len() != self.segment_count() {
            return Err(ScrollfxError::validation(format!(
                "interpolation has {} segments but {} eases",
                self.segment_count(),
                self.eases.len()
            )));
        }
        Ok(())
    }

    /// Map `input` to an output value.
    pub fn sample(&self, input: f64) -> T {
        let keys = &self.breakpoints;
        let last = keys.len() - 1;

        if keys.len() == 1 {
            return self.outputs[0].clone();
        }

        let idx = keys.partition_point(|k| *k <= input);
        let seg = if idx == 0 {
            if self.clamp {
                return self.outputs[0].clone();
            }
            0
        } else if idx > last {
            if self.clamp || input == keys[last] {
                return self.outputs[last].clone();
            }
            last - 1
        } else {
            idx - 1
        };

        let (a, b) = (keys[seg], keys[seg + 1]);
        let span = b - a;
        if span <= 0.0 {
            return self.outputs[seg + 1].clone();
        }

        let t = (input - a) / span;
        let te = match self.eases.get(seg) {
            Some(ease) if (0.0..=1.0).contains(&t) => ease.apply(t),
            _ => t,
        };
        T::lerp(&self.outputs[seg], &self.outputs[seg + 1], te)
    }
}

/// Shorthand for a validated `f64` mapping.
pub fn interpolate(breakpoints: &[f64], outputs: &[f64]) -> ScrollfxResult<Interpolator<f64>> {
    Interpolator::new(breakpoints.to_vec(), outputs.to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
