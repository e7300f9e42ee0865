use crate::{
    foundation::core::{Rect, Size},
    showcase::config::ShowcaseConfig,
};

/// The five stacked sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Parallax hero with floating orbs.
    Hero,
    /// Staggered feature grid.
    Features,
    /// Scroll progress bars.
    Progress,
    /// Scroll-rotated, hoverable cards.
    Gallery,
    /// Closing reveal.
    Closing,
}

impl SectionKind {
    /// All sections in document order.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Features,
        Self::Progress,
        Self::Gallery,
        Self::Closing,
    ];

    /// Stable identifier used in element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Progress => "progress",
            Self::Gallery => "gallery",
            Self::Closing => "closing",
        }
    }
}

/// Document-space geometry of the showcase for one viewport size.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseLayout {
    /// Section bounds in [`SectionKind::ALL`] order.
    pub sections: [Rect; 5],
    /// Feature grid container bounds.
    pub feature_grid: Rect,
    /// Feature card bounds, row-major.
    pub feature_cards: Vec<Rect>,
    /// Gallery card bounds, left to right.
    pub gallery_cards: Vec<Rect>,
    /// Total document height.
    pub content_height: f64,
}

const GRID_PADDING_FRACTION: f64 = 0.15;
const GALLERY_CARD_ASPECT: f64 = 1.4;

impl ShowcaseLayout {
    /// Stack the sections vertically for a viewport of `size`.
    pub fn compute(config: &ShowcaseConfig, size: Size) -> Self {
        let mut sections = [Rect::ZERO; 5];
        let mut top = 0.0;
        for (slot, vh) in sections.iter_mut().zip(config.sections.as_array()) {
            let h = vh * size.height;
            *slot = Rect::new(0.0, top, size.width, top + h);
            top += h;
        }

        let features = sections[1];
        let f = &config.features;
        let columns = f.columns.max(1);
        let rows = f.count.div_ceil(columns);
        let pad_x = size.width * GRID_PADDING_FRACTION;
        let inner_w = (size.width - 2.0 * pad_x).max(0.0);
        let card_w = ((inner_w - f.gap * (columns as f64 - 1.0)) / columns as f64).max(0.0);
        let grid_h = if rows == 0 {
            0.0
        } else {
            rows as f64 * f.card_height + (rows as f64 - 1.0) * f.gap
        };
        let grid_top = features.y0 + features.height() * GRID_PADDING_FRACTION;
        let feature_grid = Rect::new(pad_x, grid_top, pad_x + inner_w, grid_top + grid_h);
        let feature_cards = (0..f.count)
            .map(|i| {
                let (row, col) = (i / columns, i % columns);
                let x0 = pad_x + col as f64 * (card_w + f.gap);
                let y0 = grid_top + row as f64 * (f.card_height + f.gap);
                Rect::new(x0, y0, x0 + card_w, y0 + f.card_height)
            })
            .collect();

        let gallery = sections[3];
        let n = config.gallery.count;
        let gallery_cards = if n == 0 {
            Vec::new()
        } else {
            let slot_w = inner_w / n as f64;
            let card_w = slot_w * 0.8;
            let card_h = card_w * GALLERY_CARD_ASPECT;
            let y0 = gallery.center().y - card_h / 2.0;
            (0..n)
                .map(|i| {
                    let x0 = pad_x + i as f64 * slot_w + (slot_w - card_w) / 2.0;
                    Rect::new(x0, y0, x0 + card_w, y0 + card_h)
                })
                .collect()
        };

        Self {
            sections,
            feature_grid,
            feature_cards,
            gallery_cards,
            content_height: top,
        }
    }

    /// Bounds of `kind`.
    pub fn section(&self, kind: SectionKind) -> Rect {
        let idx = SectionKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        self.sections[idx]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/showcase/layout.rs"]
mod tests;
