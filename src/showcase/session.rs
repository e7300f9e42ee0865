use crate::{
    animation::interp::Lerp,
    animation::transition::{KeyframeLoop, LoopMode, Transition},
    foundation::core::{Rect, Size, Viewport},
    foundation::error::{ScrollfxError, ScrollfxResult},
    motion::stagger::linear_series,
    motion::style::Style,
    motion::variants::{AnimationController, HoverController, VariantName},
    scroll::progress::{ScrollTarget, ScrollTracker},
    scroll::visibility::InViewTracker,
    showcase::config::ShowcaseConfig,
    showcase::layout::{SectionKind, ShowcaseLayout},
    signal::Signal,
};

/// Input delivered by the host rendering environment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Document scrolled to `y` px.
    Scroll {
        /// New vertical scroll offset.
        y: f64,
    },
    /// Viewport resized.
    Resize {
        /// New viewport width.
        width: f64,
        /// New viewport height.
        height: f64,
    },
    /// Host clock advanced to `time` seconds since mount.
    Tick {
        /// Current time.
        time: f64,
    },
    /// Pointer entered or left a gallery card.
    Hover {
        /// Gallery card index.
        card: usize,
        /// Whether the pointer is over the card.
        hovered: bool,
    },
}

/// Resolved state of one animated element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementFrame {
    /// Stable element id, e.g. `features.card.2`.
    pub id: String,
    /// Section the element belongs to.
    pub section: SectionKind,
    /// Resolved style.
    pub style: Style,
    /// CSS rendering of `style`.
    pub css: String,
}

/// Per-section summary.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionFrame {
    /// Which section.
    pub kind: SectionKind,
    /// Document-space top (px).
    pub top: f64,
    /// Height (px).
    pub height: f64,
    /// Local scroll progress, if the section tracks one.
    pub progress: Option<f64>,
}

/// Everything a rendering layer needs for one paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShowcaseFrame {
    /// Session time (seconds).
    pub time: f64,
    /// Vertical scroll offset (px).
    pub scroll_y: f64,
    /// Whole-page progress.
    pub page_progress: f64,
    /// Whether the feature grid has been revealed.
    pub features_visible: bool,
    /// Sections in document order.
    pub sections: Vec<SectionFrame>,
    /// Animated elements in document order.
    pub elements: Vec<ElementFrame>,
}

struct Orb {
    float_y: KeyframeLoop<f64>,
    float_scale: KeyframeLoop<f64>,
    depth: f64,
}

/// A mounted showcase: owns the scroll/visibility signals and per-element animation state.
///
/// All recomputation happens inside [`ShowcaseSession::handle`]; rendering layers either call
/// [`ShowcaseSession::frame`] after each event or subscribe to the exposed signals.
pub struct ShowcaseSession {
    config: ShowcaseConfig,
    viewport: Viewport,
    layout: ShowcaseLayout,
    now: f64,

    page: ScrollTracker,
    hero: ScrollTracker,
    progress: ScrollTracker,
    gallery: ScrollTracker,
    closing: ScrollTracker,

    features_in_view: InViewTracker,
    feature_cards: Vec<AnimationController>,
    orbs: Vec<Orb>,
    gallery_hover: Vec<HoverController>,
}

impl ShowcaseSession {
    /// Mount `config` in a `width` x `height` viewport at scroll 0, time 0.
    #[tracing::instrument(skip(config))]
    pub fn mount(config: ShowcaseConfig, width: f64, height: f64) -> ScrollfxResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(width, height)?;
        let layout = ShowcaseLayout::compute(&config, viewport.size());

        let count = config.features.count;
        let feature_cards = config
            .features
            .stagger
            .schedule(count)
            .into_iter()
            .map(|delay| {
                AnimationController::new(config.features.variants, config.features.transition)
                    .with_delay(delay)
            })
            .collect();

        let orbs = build_orbs(&config)?;
        let gallery_hover = (0..config.gallery.count)
            .map(|_| HoverController::new(config.gallery.hover, config.gallery.hover_transition))
            .collect();

        let element = |kind: SectionKind| ScrollTarget::Element(layout.section(kind));
        let mut session = Self {
            page: ScrollTracker::page(layout.content_height),
            hero: ScrollTracker::new(element(SectionKind::Hero), config.hero.offset),
            progress: ScrollTracker::new(element(SectionKind::Progress), config.progress.offset),
            gallery: ScrollTracker::new(element(SectionKind::Gallery), config.gallery.offset),
            closing: ScrollTracker::new(element(SectionKind::Closing), config.closing.offset),
            features_in_view: InViewTracker::new(layout.feature_grid, config.features.in_view),
            feature_cards,
            orbs,
            gallery_hover,
            config,
            viewport,
            layout,
            now: 0.0,
        };

        session.refresh_scroll();
        tracing::debug!(
            content_height = session.layout.content_height,
            features = session.feature_cards.len(),
            "mounted showcase"
        );
        Ok(session)
    }

    /// Apply one host event.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn handle(&mut self, event: HostEvent) -> ScrollfxResult<()> {
        match event {
            HostEvent::Scroll { y } => {
                if !y.is_finite() {
                    return Err(ScrollfxError::evaluation("scroll offset must be finite"));
                }
                self.viewport = self.viewport.scrolled_to(y);
                self.refresh_scroll();
            }
            HostEvent::Resize { width, height } => {
                let scroll_y = self.viewport.scroll_y;
                self.viewport = Viewport::new(width, height)?.scrolled_to(scroll_y);
                self.relayout();
                self.refresh_scroll();
            }
            HostEvent::Tick { time } => {
                if !time.is_finite() {
                    return Err(ScrollfxError::evaluation("tick time must be finite"));
                }
                // The host clock is monotonic; late ticks do not rewind running transitions.
                self.now = self.now.max(time);
            }
            HostEvent::Hover { card, hovered } => {
                let now = self.now;
                let ctl = self.gallery_hover.get_mut(card).ok_or_else(|| {
                    ScrollfxError::evaluation(format!("no gallery card with index {card}"))
                })?;
                if ctl.set_hovered(hovered, now) {
                    tracing::debug!(card, hovered, "hover changed");
                }
            }
        }
        Ok(())
    }

    /// Apply events in order, stopping at the first error.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = HostEvent>) -> ScrollfxResult<()> {
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    fn relayout(&mut self) {
        self.layout = ShowcaseLayout::compute(&self.config, self.viewport.size());
        let section = |kind| ScrollTarget::Element(self.layout.section(kind));
        let hero = section(SectionKind::Hero);
        let progress = section(SectionKind::Progress);
        let gallery = section(SectionKind::Gallery);
        let closing = section(SectionKind::Closing);
        self.page.set_target(ScrollTarget::Page {
            content_height: self.layout.content_height,
        });
        self.hero.set_target(hero);
        self.progress.set_target(progress);
        self.gallery.set_target(gallery);
        self.closing.set_target(closing);
        self.features_in_view.set_target(self.layout.feature_grid);
    }

    fn refresh_scroll(&mut self) {
        let vp = self.viewport;
        for tracker in [
            &self.page,
            &self.hero,
            &self.progress,
            &self.gallery,
            &self.closing,
        ] {
            tracker.update(&vp);
        }

        let visible = self.features_in_view.update(&vp);
        let target = VariantName::from_visible(visible);
        let now = self.now;
        let mut flipped = false;
        for card in &mut self.feature_cards {
            flipped |= card.set(target, now);
        }
        if flipped {
            tracing::debug!(?target, time = now, "feature grid variant changed");
        }
    }

    /// Current session time.
    pub fn time(&self) -> f64 {
        self.now
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current geometry.
    pub fn layout(&self) -> &ShowcaseLayout {
        &self.layout
    }

    /// Configuration the session was mounted with.
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Whole-page progress signal.
    pub fn page_progress(&self) -> &Signal<f64> {
        self.page.signal()
    }

    /// Local progress signal of `kind`, if the section tracks one.
    pub fn section_progress(&self, kind: SectionKind) -> Option<&Signal<f64>> {
        match kind {
            SectionKind::Hero => Some(self.hero.signal()),
            SectionKind::Features => None,
            SectionKind::Progress => Some(self.progress.signal()),
            SectionKind::Gallery => Some(self.gallery.signal()),
            SectionKind::Closing => Some(self.closing.signal()),
        }
    }

    /// Visibility signal of the feature grid.
    pub fn features_visible(&self) -> &Signal<bool> {
        self.features_in_view.signal()
    }

    /// True while any time-driven transition is still moving (looping orbs excluded).
    pub fn is_settled(&self) -> bool {
        let now = self.now;
        !self.feature_cards.iter().any(|c| c.is_animating(now))
            && !self.gallery_hover.iter().any(|h| h.is_animating(now))
    }

    /// Resolve every element at the current time and scroll position.
    pub fn frame(&self) -> ShowcaseFrame {
        let now = self.now;
        let mut elements = Vec::new();
        let mut push = |section: SectionKind, id: String, style: Style| {
            elements.push(ElementFrame {
                id,
                section,
                css: style.to_css(),
                style,
            });
        };

        // Hero: parallax title plus floating orbs.
        let hero_p = self.hero.progress();
        let hero = &self.config.hero;
        push(
            SectionKind::Hero,
            "hero.title".to_string(),
            Style {
                y: hero.y.sample(hero_p),
                scale: hero.scale.sample(hero_p),
                opacity: hero.opacity.sample(hero_p),
                ..Style::default()
            },
        );
        let parallax = self.config.orbs.parallax_y.sample(hero_p);
        for (i, orb) in self.orbs.iter().enumerate() {
            push(
                SectionKind::Hero,
                format!("hero.orb.{i}"),
                Style {
                    y: orb.float_y.sample(now) + parallax * orb.depth,
                    scale: orb.float_scale.sample(now),
                    ..Style::default()
                },
            );
        }

        // Features: staggered reveal.
        for (i, card) in self.feature_cards.iter().enumerate() {
            push(
                SectionKind::Features,
                format!("features.card.{i}"),
                card.sample(now),
            );
        }

        // Progress: page bar, section bar and heading parallax.
        let section_p = self.progress.progress();
        push(
            SectionKind::Progress,
            "progress.page_bar".to_string(),
            Style {
                scale_x: self.page.progress(),
                ..Style::default()
            },
        );
        push(
            SectionKind::Progress,
            "progress.section_bar".to_string(),
            Style {
                scale_x: section_p,
                ..Style::default()
            },
        );
        push(
            SectionKind::Progress,
            "progress.heading".to_string(),
            Style {
                y: self.config.progress.heading_y.sample(section_p),
                ..Style::default()
            },
        );

        // Gallery: scroll-driven rotation, alternating direction, with hover feedback.
        let gallery_p = self.gallery.progress();
        let rotate = self.config.gallery.rotate.sample(gallery_p);
        for (i, hover) in self.gallery_hover.iter().enumerate() {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            let base = Style {
                rotate: rotate * sign,
                ..Style::default()
            };
            push(
                SectionKind::Gallery,
                format!("gallery.card.{i}"),
                hover.apply(base, now),
            );
        }

        // Closing: scale/opacity reveal.
        let closing_p = self.closing.progress();
        push(
            SectionKind::Closing,
            "closing.panel".to_string(),
            Style {
                scale: self.config.closing.scale.sample(closing_p),
                opacity: self.config.closing.opacity.sample(closing_p),
                ..Style::default()
            },
        );

        let sections = SectionKind::ALL
            .iter()
            .map(|&kind| {
                let r: Rect = self.layout.section(kind);
                SectionFrame {
                    kind,
                    top: r.y0,
                    height: r.height(),
                    progress: self.section_progress(kind).map(Signal::get),
                }
            })
            .collect();

        ShowcaseFrame {
            time: now,
            scroll_y: self.viewport.scroll_y,
            page_progress: self.page.progress(),
            features_visible: self.features_in_view.is_visible(),
            sections,
            elements,
        }
    }
}

fn build_orbs(config: &ShowcaseConfig) -> ScrollfxResult<Vec<Orb>> {
    let o = &config.orbs;
    let durations = linear_series(o.base_duration, o.duration_step, o.count);
    let delays = linear_series(0.0, o.delay_step, o.count);
    durations
        .into_iter()
        .zip(delays)
        .enumerate()
        .map(|(i, (duration, delay))| {
            let timing = Transition::new(duration)
                .with_delay(delay)
                .with_ease(o.ease)
                .looping(LoopMode::Repeat);
            Ok(Orb {
                float_y: KeyframeLoop::new(o.float_y.clone(), timing)?,
                float_scale: KeyframeLoop::new(o.float_scale.clone(), timing)?,
                depth: f64::lerp(&0.2, &1.0, (i + 1) as f64 / o.count as f64),
            })
        })
        .collect()
}

/// The showcase view: five sections of scroll-linked effects.
#[derive(Clone, Debug, Default)]
pub struct Showcase {
    config: ShowcaseConfig,
}

impl Showcase {
    /// Showcase with the built-in configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Showcase with a custom configuration.
    pub fn with_config(config: ShowcaseConfig) -> ScrollfxResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Mount a session in a viewport of `size`.
    pub fn mount(&self, size: Size) -> ScrollfxResult<ShowcaseSession> {
        ShowcaseSession::mount(self.config.clone(), size.width, size.height)
    }

    /// One-shot render: mount, scroll to `scroll_y` at time 0, then advance the clock to `time`.
    pub fn render(&self, size: Size, scroll_y: f64, time: f64) -> ScrollfxResult<ShowcaseFrame> {
        let mut session = self.mount(size)?;
        session.handle_all([HostEvent::Scroll { y: scroll_y }, HostEvent::Tick { time }])?;
        Ok(session.frame())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/showcase/session.rs"]
mod tests;
