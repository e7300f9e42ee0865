//! Tunables of the showcase view.
//!
//! Every field has a default, so a JSON file only needs the values it overrides. Deserialized
//! configurations must pass [`ShowcaseConfig::validate`] before a session is mounted.

use crate::{
    animation::ease::Ease,
    animation::interp::Interpolator,
    animation::transition::Transition,
    foundation::error::{ScrollfxError, ScrollfxResult},
    motion::stagger::Stagger,
    motion::style::StylePatch,
    motion::variants::Variants,
    scroll::offset::ScrollOffset,
    scroll::visibility::{InViewOptions, Margin},
};

/// Upper bound on feature cards, orbs and gallery cards.
pub(crate) const MAX_ELEMENTS: usize = 1024;

fn mapping(breakpoints: &[f64], outputs: &[f64]) -> Interpolator<f64> {
    Interpolator::new_unchecked(breakpoints.to_vec(), outputs.to_vec())
}

/// Complete showcase configuration.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Section heights.
    pub sections: SectionHeights,
    /// Parallax hero.
    pub hero: HeroConfig,
    /// Floating background orbs inside the hero.
    pub orbs: OrbConfig,
    /// Staggered feature grid.
    pub features: FeaturesConfig,
    /// Progress bars.
    pub progress: ProgressConfig,
    /// Scroll-rotated cards with hover feedback.
    pub gallery: GalleryConfig,
    /// Closing reveal.
    pub closing: ClosingConfig,
}

/// Section heights in viewport heights.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SectionHeights {
    /// Hero height.
    pub hero: f64,
    /// Feature grid section height.
    pub features: f64,
    /// Progress section height.
    pub progress: f64,
    /// Gallery section height.
    pub gallery: f64,
    /// Closing section height.
    pub closing: f64,
}

impl Default for SectionHeights {
    fn default() -> Self {
        Self {
            hero: 1.0,
            features: 1.2,
            progress: 1.0,
            gallery: 1.5,
            closing: 1.0,
        }
    }
}

impl SectionHeights {
    /// Heights in section order.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.hero,
            self.features,
            self.progress,
            self.gallery,
            self.closing,
        ]
    }
}

/// Hero parallax mappings, all driven by the hero's own progress.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Trigger window.
    pub offset: ScrollOffset,
    /// Title vertical offset (px).
    pub y: Interpolator<f64>,
    /// Title scale.
    pub scale: Interpolator<f64>,
    /// Title opacity.
    pub opacity: Interpolator<f64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            offset: ScrollOffset::EXIT,
            y: mapping(&[0.0, 1.0], &[0.0, 300.0]),
            scale: mapping(&[0.0, 0.5, 1.0], &[1.0, 1.2, 1.0]),
            opacity: mapping(&[0.0, 0.8], &[1.0, 0.0]),
        }
    }
}

/// Looping background orbs: orb `i` floats with period `base_duration + i * duration_step` and
/// starts after `i * delay_step` seconds.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    /// Number of orbs.
    pub count: usize,
    /// Period of the first orb (seconds).
    pub base_duration: f64,
    /// Period increment per orb.
    pub duration_step: f64,
    /// Start delay increment per orb.
    pub delay_step: f64,
    /// Vertical float keyframes over one period (px).
    pub float_y: Vec<f64>,
    /// Scale keyframes over one period.
    pub float_scale: Vec<f64>,
    /// Easing of each period.
    pub ease: Ease,
    /// Extra parallax offset from hero progress (px); deeper orbs move proportionally more.
    pub parallax_y: Interpolator<f64>,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            count: 5,
            base_duration: 3.0,
            duration_step: 0.5,
            delay_step: 0.3,
            float_y: vec![0.0, -20.0, 0.0],
            float_scale: vec![1.0, 1.1, 1.0],
            ease: Ease::InOutQuad,
            parallax_y: mapping(&[0.0, 1.0], &[0.0, 150.0]),
        }
    }
}

/// Feature grid revealed when it scrolls into view.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Number of cards.
    pub count: usize,
    /// Grid columns.
    pub columns: usize,
    /// Card height (px).
    pub card_height: f64,
    /// Gap between cards (px).
    pub gap: f64,
    /// Visibility trigger of the grid container.
    pub in_view: InViewOptions,
    /// Per-card start offsets.
    pub stagger: Stagger,
    /// Card styles.
    pub variants: Variants,
    /// Card transition.
    pub transition: Transition,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            count: 6,
            columns: 3,
            card_height: 220.0,
            gap: 24.0,
            in_view: InViewOptions {
                margin: Margin::uniform(-100.0),
                once: true,
                ..InViewOptions::default()
            },
            stagger: Stagger::new(0.2, 0.1),
            variants: Variants::fade_up(50.0),
            transition: Transition::new(0.6),
        }
    }
}

/// Progress bars and the section heading parallax.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Trigger window of the section-local bar.
    pub offset: ScrollOffset,
    /// Heading vertical offset from section progress (px).
    pub heading_y: Interpolator<f64>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            offset: ScrollOffset::ENTER_EXIT,
            heading_y: mapping(&[0.0, 1.0], &[100.0, -100.0]),
        }
    }
}

/// Scroll-rotated cards with hover micro-interactions.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of cards.
    pub count: usize,
    /// Trigger window.
    pub offset: ScrollOffset,
    /// Card rotation from section progress (degrees).
    pub rotate: Interpolator<f64>,
    /// Style blended in while hovered.
    pub hover: StylePatch,
    /// Hover blend timing.
    pub hover_transition: Transition,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            count: 4,
            offset: ScrollOffset::ENTER_EXIT,
            rotate: mapping(&[0.0, 1.0], &[-10.0, 10.0]),
            hover: StylePatch {
                scale: Some(1.05),
                y: Some(-8.0),
                ..StylePatch::default()
            },
            hover_transition: Transition::new(0.2).with_ease(Ease::OutQuad),
        }
    }
}

/// Closing panel scale/opacity reveal.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClosingConfig {
    /// Trigger window.
    pub offset: ScrollOffset,
    /// Panel scale.
    pub scale: Interpolator<f64>,
    /// Panel opacity.
    pub opacity: Interpolator<f64>,
}

impl Default for ClosingConfig {
    fn default() -> Self {
        Self {
            offset: ScrollOffset::ENTER,
            scale: mapping(&[0.0, 1.0], &[0.8, 1.0]),
            opacity: mapping(&[0.0, 0.5], &[0.0, 1.0]),
        }
    }
}

impl ShowcaseConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(s: &str) -> ScrollfxResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every mapping, timing and count.
    pub fn validate(&self) -> ScrollfxResult<()> {
        for (name, h) in ["hero", "features", "progress", "gallery", "closing"]
            .into_iter()
            .zip(self.sections.as_array())
        {
            if !h.is_finite() || h <= 0.0 {
                return Err(ScrollfxError::validation(format!(
                    "section height '{name}' must be finite and > 0"
                )));
            }
        }

        for m in [
            &self.hero.y,
            &self.hero.scale,
            &self.hero.opacity,
            &self.orbs.parallax_y,
            &self.progress.heading_y,
            &self.gallery.rotate,
            &self.closing.scale,
            &self.closing.opacity,
        ] {
            m.validate()?;
        }

        for (name, count) in [
            ("orbs", self.orbs.count),
            ("features", self.features.count),
            ("gallery", self.gallery.count),
        ] {
            if count > MAX_ELEMENTS {
                return Err(ScrollfxError::validation(format!(
                    "{name} count {count} exceeds {MAX_ELEMENTS}"
                )));
            }
        }

        let orbs = &self.orbs;
        if !(orbs.base_duration.is_finite() && orbs.base_duration > 0.0)
            || !(orbs.duration_step.is_finite() && orbs.duration_step >= 0.0)
            || !(orbs.delay_step.is_finite() && orbs.delay_step >= 0.0)
        {
            return Err(ScrollfxError::validation(
                "orb durations must be > 0 and steps >= 0",
            ));
        }
        if orbs.float_y.is_empty() || orbs.float_scale.is_empty() {
            return Err(ScrollfxError::validation(
                "orb float keyframes must be non-empty",
            ));
        }

        let features = &self.features;
        if features.columns == 0 {
            return Err(ScrollfxError::validation("feature columns must be > 0"));
        }
        if !(features.card_height.is_finite() && features.card_height > 0.0)
            || !(features.gap.is_finite() && features.gap >= 0.0)
        {
            return Err(ScrollfxError::validation(
                "feature card height must be > 0 and gap >= 0",
            ));
        }
        features.in_view.validate()?;
        features.stagger.validate()?;
        features.transition.validate()?;

        self.gallery.hover_transition.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/showcase/config.rs"]
mod tests;
