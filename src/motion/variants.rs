use crate::{
    animation::interp::Lerp,
    animation::transition::Transition,
    motion::style::{Style, StylePatch},
};

/// Named visual state of a two-state element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantName {
    /// Initial state.
    #[default]
    Hidden,
    /// Revealed state.
    Visible,
}

impl VariantName {
    /// `Visible` for `true`, `Hidden` for `false`.
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }
}

/// Target styles for both states.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Variants {
    /// Style while hidden.
    pub hidden: Style,
    /// Style while visible.
    pub visible: Style,
}

impl Variants {
    /// Style for `name`.
    pub fn get(&self, name: VariantName) -> Style {
        match name {
            VariantName::Hidden => self.hidden,
            VariantName::Visible => self.visible,
        }
    }

    /// Common "fade and rise" reveal: hidden is transparent and shifted down by `rise` px.
    pub fn fade_up(rise: f64) -> Self {
        Self {
            hidden: Style {
                opacity: 0.0,
                y: rise,
                ..Style::default()
            },
            visible: Style::default(),
        }
    }
}

/// Time-driven level between 0 (off) and 1 (on).
///
/// Flipping the state starts a transition from the level sampled at that moment, so a flip
/// during a running transition continues from where the element currently is.
#[derive(Clone, Copy, Debug)]
pub struct Toggle {
    transition: Transition,
    on: bool,
    from: f64,
    started_at: Option<f64>,
}

impl Toggle {
    /// Settled in the off state.
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            on: false,
            from: 0.0,
            started_at: None,
        }
    }

    /// Timing used for flips.
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Replace the timing of future flips.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    /// Target state.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip toward `on` at time `now`. Returns `false` when already heading there.
    pub fn set(&mut self, on: bool, now: f64) -> bool {
        if on == self.on {
            return false;
        }
        self.from = self.level(now);
        self.on = on;
        self.started_at = Some(now);
        true
    }

    /// Level at time `now`.
    pub fn level(&self, now: f64) -> f64 {
        let target = if self.on { 1.0 } else { 0.0 };
        match self.started_at {
            None => target,
            Some(t0) => f64::lerp(&self.from, &target, self.transition.progress_at(now - t0)),
        }
    }

    /// True while the level is still moving.
    pub fn is_animating(&self, now: f64) -> bool {
        self.started_at
            .is_some_and(|t0| !self.transition.is_finished(now - t0))
    }
}

/// Two-state animation controller for one element.
///
/// Starts settled in [`VariantName::Hidden`].
#[derive(Clone, Copy, Debug)]
pub struct AnimationController {
    variants: Variants,
    base: Transition,
    toggle: Toggle,
}

impl AnimationController {
    /// Controller without stagger offset.
    pub fn new(variants: Variants, transition: Transition) -> Self {
        Self {
            variants,
            base: transition,
            toggle: Toggle::new(transition),
        }
    }

    /// Add a per-element start offset (seconds) on top of the transition's own delay.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.set_delay(delay);
        self
    }

    /// Replace the per-element start offset.
    pub fn set_delay(&mut self, delay: f64) {
        self.toggle
            .set_transition(self.base.with_delay(self.base.delay + delay));
    }

    /// Effective start delay of the next transition.
    pub fn delay(&self) -> f64 {
        self.toggle.transition().delay
    }

    /// Variant currently targeted.
    pub fn state(&self) -> VariantName {
        VariantName::from_visible(self.toggle.is_on())
    }

    /// Target styles.
    pub fn variants(&self) -> &Variants {
        &self.variants
    }

    /// Start transitioning toward `target` at time `now`.
    ///
    /// Supersedes a running transition. Returns `false` when `target` is already the target.
    pub fn set(&mut self, target: VariantName, now: f64) -> bool {
        self.toggle.set(target == VariantName::Visible, now)
    }

    /// Style at time `now`.
    pub fn sample(&self, now: f64) -> Style {
        Style::lerp(
            &self.variants.hidden,
            &self.variants.visible,
            self.toggle.level(now),
        )
    }

    /// True while a transition is in flight.
    pub fn is_animating(&self, now: f64) -> bool {
        self.toggle.is_animating(now)
    }
}

/// Hover micro-interaction: blends a [`StylePatch`] over a base style while hovered.
#[derive(Clone, Copy, Debug)]
pub struct HoverController {
    patch: StylePatch,
    toggle: Toggle,
}

impl HoverController {
    /// Controller that is not hovered.
    pub fn new(patch: StylePatch, transition: Transition) -> Self {
        Self {
            patch,
            toggle: Toggle::new(transition),
        }
    }

    /// Pointer entered (`true`) or left (`false`) at `now`.
    pub fn set_hovered(&mut self, hovered: bool, now: f64) -> bool {
        self.toggle.set(hovered, now)
    }

    /// Whether the pointer is over the element.
    pub fn is_hovered(&self) -> bool {
        self.toggle.is_on()
    }

    /// `base` with the hover patch blended in by the current hover level.
    pub fn apply(&self, base: Style, now: f64) -> Style {
        let level = self.toggle.level(now);
        if level == 0.0 {
            return base;
        }
        Style::lerp(&base, &base.patched(&self.patch), level)
    }

    /// True while the hover blend is still moving.
    pub fn is_animating(&self, now: f64) -> bool {
        self.toggle.is_animating(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/variants.rs"]
mod tests;
