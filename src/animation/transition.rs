use crate::{
    animation::ease::Ease,
    animation::interp::{Interpolator, Lerp},
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// How a time-driven animation behaves after its first iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play once and hold the final value.
    #[default]
    Never,
    /// Repeat forever.
    Loop(LoopMode),
}

/// Iteration order for repeating animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    /// Restart from the beginning on every iteration.
    Repeat,
    /// Alternate forward and backward iterations.
    PingPong,
}

/// Time parameters of a transition, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transition {
    /// Length of one iteration.
    pub duration: f64,
    /// Wait before the first iteration starts.
    pub delay: f64,
    /// Easing applied to each iteration.
    pub ease: Ease,
    /// Repeat behavior.
    pub repeat: Repeat,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: 0.6,
            delay: 0.0,
            ease: Ease::OutCubic,
            repeat: Repeat::Never,
        }
    }
}

impl Transition {
    /// One-shot transition with the default easing.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Same transition with another start delay.
    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Same transition with another easing curve.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Same transition repeating forever.
    pub fn looping(self, mode: LoopMode) -> Self {
        Self {
            repeat: Repeat::Loop(mode),
            ..self
        }
    }

    /// Check durations and delays.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScrollfxError::animation(
                "transition duration must be finite and >= 0",
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(ScrollfxError::animation(
                "transition delay must be finite and >= 0",
            ));
        }
        if matches!(self.repeat, Repeat::Loop(_)) && self.duration == 0.0 {
            return Err(ScrollfxError::animation(
                "looping transition duration must be > 0",
            ));
        }
        Ok(())
    }

    /// Eased progress in `[0, 1]` after `elapsed` seconds since the transition was started.
    pub fn progress_at(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return self.ease.apply(0.0);
        }
        if self.duration <= 0.0 {
            return 1.0;
        }

        let cycles = local / self.duration;
        let t = match self.repeat {
            Repeat::Never => cycles.min(1.0),
            Repeat::Loop(LoopMode::Repeat) => cycles.fract(),
            Repeat::Loop(LoopMode::PingPong) => {
                let frac = cycles.fract();
                if (cycles.floor() as u64) % 2 == 1 {
                    1.0 - frac
                } else {
                    frac
                }
            }
        };
        self.ease.apply(t)
    }

    /// True once a non-repeating transition has reached its end.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        match self.repeat {
            Repeat::Never => elapsed - self.delay >= self.duration,
            Repeat::Loop(_) => false,
        }
    }
}

/// Values spread evenly across one iteration of a (usually looping) transition.
#[derive(Clone, Debug)]
pub struct KeyframeLoop<T> {
    frames: Interpolator<T>,
    transition: Transition,
}

impl<T> KeyframeLoop<T>
where
    T: Lerp + Clone,
{
    /// Build a keyframe track; `values` must be non-empty.
    pub fn new(values: Vec<T>, transition: Transition) -> ScrollfxResult<Self> {
        transition.validate()?;
        let n = values.len();
        let breakpoints = match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        };
        let frames = Interpolator::new(breakpoints, values)?;
        Ok(Self { frames, transition })
    }

    /// Timing of the track.
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Value at `elapsed` seconds since the track started.
    pub fn sample(&self, elapsed: f64) -> T {
        self.frames.sample(self.transition.progress_at(elapsed))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
