use crate::animation::interp::Lerp;

/// Resolved visual attributes of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Extra horizontal scale, multiplied with `scale`.
    pub scale_x: f64,
    /// Extra vertical scale, multiplied with `scale`.
    pub scale_y: f64,
    /// Rotation in degrees, clockwise.
    pub rotate: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotate: 0.0,
            opacity: 1.0,
        }
    }
}

impl Lerp for Style {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            scale_x: f64::lerp(&a.scale_x, &b.scale_x, t),
            scale_y: f64::lerp(&a.scale_y, &b.scale_y, t),
            rotate: f64::lerp(&a.rotate, &b.rotate, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

impl Style {
    /// Apply `patch` on top of this style.
    pub fn patched(mut self, patch: &StylePatch) -> Self {
        patch.apply(&mut self);
        self
    }

    /// Effective horizontal scale.
    pub fn total_scale_x(&self) -> f64 {
        self.scale * self.scale_x
    }

    /// Effective vertical scale.
    pub fn total_scale_y(&self) -> f64 {
        self.scale * self.scale_y
    }

    /// CSS declarations for this style (`transform` and `opacity`).
    pub fn to_css(&self) -> String {
        let mut transform = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            transform.push(format!(
                "translate3d({}px, {}px, 0)",
                fmt_num(self.x),
                fmt_num(self.y)
            ));
        }
        if self.scale != 1.0 {
            transform.push(format!("scale({})", fmt_num(self.scale)));
        }
        if self.scale_x != 1.0 {
            transform.push(format!("scaleX({})", fmt_num(self.scale_x)));
        }
        if self.scale_y != 1.0 {
            transform.push(format!("scaleY({})", fmt_num(self.scale_y)));
        }
        if self.rotate != 0.0 {
            transform.push(format!("rotate({}deg)", fmt_num(self.rotate)));
        }

        let transform = if transform.is_empty() {
            "none".to_string()
        } else {
            transform.join(" ")
        };
        format!(
            "transform: {transform}; opacity: {};",
            fmt_num(self.opacity.clamp(0.0, 1.0))
        )
    }
}

// At most 3 decimals, no trailing zeros, no negative zero.
fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    let r = if r == 0.0 { 0.0 } else { r };
    let s = format!("{r:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Partial style; unset fields keep the underlying value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StylePatch {
    /// Horizontal offset override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical offset override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Uniform scale override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Horizontal scale override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    /// Vertical scale override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    /// Rotation override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    /// Opacity override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl StylePatch {
    /// Overwrite the fields set in this patch.
    pub fn apply(&self, style: &mut Style) {
        let fields = [
            (self.x, &mut style.x),
            (self.y, &mut style.y),
            (self.scale, &mut style.scale),
            (self.scale_x, &mut style.scale_x),
            (self.scale_y, &mut style.scale_y),
            (self.rotate, &mut style.rotate),
            (self.opacity, &mut style.opacity),
        ];
        for (value, slot) in fields {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/style.rs"]
mod tests;
