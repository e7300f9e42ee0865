//! scrollfx is a deterministic engine for scroll-linked motion effects.
//!
//! It turns host input (scroll offset, viewport size, clock, pointer hover) into resolved
//! per-element styles for parallax layers, staggered reveals, progress bars and hover
//! micro-interactions.
//!
//! # Data flow
//!
//! 1. **Track**: [`ScrollTracker`] turns the viewport position into a progress signal in `[0, 1]`;
//!    [`InViewTracker`] turns element/viewport intersection into a visibility signal.
//! 2. **Map**: [`Interpolator`] maps progress to style values (offset, scale, rotation, opacity).
//! 3. **Animate**: [`AnimationController`] runs time-driven `hidden`/`visible` transitions,
//!    offset per child by a [`Stagger`]; [`HoverController`] blends hover feedback.
//! 4. **Render**: [`ShowcaseSession::frame`] resolves every element to a [`Style`] and its CSS.
//!
//! The interpolation and stagger math is pure. Signals ([`Signal`]) are single-threaded
//! observable values that a rendering layer may subscribe to.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod motion;
mod scroll;
mod showcase;

/// Observable values.
pub mod signal;

pub use animation::ease::Ease;
pub use animation::interp::{Interpolator, Lerp, interpolate};
pub use animation::transition::{KeyframeLoop, LoopMode, Repeat, Transition};
pub use foundation::core::{Fps, Rect, Size, Vec2, Viewport};
pub use foundation::error::{ScrollfxError, ScrollfxResult};
pub use motion::stagger::{Stagger, StaggerDirection, linear_series};
pub use motion::style::{Style, StylePatch};
pub use motion::variants::{AnimationController, HoverController, Toggle, VariantName, Variants};
pub use scroll::offset::{Edge, OffsetPair, ScrollOffset};
pub use scroll::progress::{ScrollTarget, ScrollTracker, scroll_progress, scroll_window};
pub use scroll::visibility::{
    Amount, InViewOptions, InViewTracker, Margin, intersection_ratio, is_in_view,
};
pub use showcase::config::{
    ClosingConfig, FeaturesConfig, GalleryConfig, HeroConfig, OrbConfig, ProgressConfig,
    SectionHeights, ShowcaseConfig,
};
pub use showcase::layout::{SectionKind, ShowcaseLayout};
pub use showcase::session::{
    ElementFrame, HostEvent, SectionFrame, Showcase, ShowcaseFrame, ShowcaseSession,
};
pub use signal::{Signal, SubscriptionId};
