use crate::foundation::error::{ScratchError, ScratchResult};
use crate::style::color::ColorDef;
use serde::{Deserialize, Serialize};

/// One stop of the diagonal base gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the top-left to bottom-right diagonal, in `0..=1`.
    pub offset: f64,
    /// Stop color. Alpha is ignored: the base layer is always opaque.
    pub color: ColorDef,
}

/// Scattered dot texture painted over the base gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparkleStyle {
    /// Number of dots.
    pub count: u32,
    /// Dot radius in raster units.
    pub radius: f64,
    /// Dot color (usually translucent white).
    pub color: ColorDef,
    /// Placement seed; equal seeds paint equal surfaces.
    #[serde(default)]
    pub seed: u64,
}

/// Inset rectangular border stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    /// Distance from the raster edge to the stroke centre line.
    pub inset: f64,
    /// Stroke width in raster units.
    pub width: f64,
    /// Stroke color.
    pub color: ColorDef,
}

/// Centered instruction label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Label text.
    pub text: String,
    /// CSS-like font family list, e.g. `"Playfair Display", serif`.
    pub font_family: String,
    /// Font size in raster units.
    pub font_size: f64,
    /// Bold weight.
    pub bold: bool,
    /// Extra spacing between glyphs in raster units.
    pub letter_spacing: f64,
    /// Baseline offset from the vertical centre.
    pub offset_y: f64,
    /// Fill color.
    pub color: ColorDef,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text: "SCRATCH TO DISCOVER".to_owned(),
            font_family: "\"Playfair Display\", serif".to_owned(),
            font_size: 13.0,
            bold: true,
            letter_spacing: 4.0,
            offset_y: 70.0,
            color: ColorDef::rgba8(0, 0, 0, 0.7),
        }
    }
}

/// Outline the host gives the overlay on screen.
///
/// The raster itself is always a full rectangle; shape only affects [`crate::ScratchSurface::compose_over`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceShape {
    /// Rounded-card layout of the multi-stage variant.
    #[default]
    Rect,
    /// Inscribed circle of the circular variant.
    Circle,
}

/// Decorative parameters for the opaque overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    /// Base gradient stops, ordered by offset. A single stop paints a solid fill.
    pub gradient: Vec<GradientStop>,
    /// Dot texture.
    pub sparkles: Option<SparkleStyle>,
    /// Border stroke.
    pub border: Option<BorderStyle>,
    /// Instruction label.
    pub label: Option<LabelStyle>,
    /// On-screen outline.
    pub shape: SurfaceShape,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self::multi_stage()
    }
}

fn hex(s: &str) -> ColorDef {
    // Preset literals only; parse failures would be a typo in this file.
    ColorDef::hex(s).unwrap_or(ColorDef::rgba(0.0, 0.0, 0.0, 1.0))
}

impl SurfaceStyle {
    /// Gold foil card: five-stop diagonal gradient, dense sparkles, inset border.
    pub fn multi_stage() -> Self {
        Self {
            gradient: vec![
                GradientStop {
                    offset: 0.0,
                    color: hex("#d4af37"),
                },
                GradientStop {
                    offset: 0.3,
                    color: hex("#f7e4a3"),
                },
                GradientStop {
                    offset: 0.5,
                    color: hex("#ffffff"),
                },
                GradientStop {
                    offset: 0.7,
                    color: hex("#f7e4a3"),
                },
                GradientStop {
                    offset: 1.0,
                    color: hex("#c09a2d"),
                },
            ],
            sparkles: Some(SparkleStyle {
                count: 500,
                radius: 1.0,
                color: ColorDef::rgba8(255, 255, 255, 0.6),
                seed: 0,
            }),
            border: Some(BorderStyle {
                inset: 8.0,
                width: 2.0,
                color: ColorDef::rgba8(0, 0, 0, 0.1),
            }),
            label: Some(LabelStyle::default()),
            shape: SurfaceShape::Rect,
        }
    }

    /// Round medallion: solid gold with a faint dot texture.
    pub fn circular() -> Self {
        Self {
            gradient: vec![GradientStop {
                offset: 0.0,
                color: hex("#d4af37"),
            }],
            sparkles: Some(SparkleStyle {
                count: 400,
                radius: 0.5,
                color: ColorDef::rgba8(255, 255, 255, 0.1),
                seed: 0,
            }),
            border: None,
            label: Some(LabelStyle {
                text: "SCRATCH HERE".to_owned(),
                font_family: "sans-serif".to_owned(),
                font_size: 10.0,
                bold: false,
                letter_spacing: 0.0,
                offset_y: 30.0,
                color: ColorDef::rgba8(0, 0, 0, 0.3),
            }),
            shape: SurfaceShape::Circle,
        }
    }

    /// Same style without the text label (no font lookup at paint time).
    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    /// Check that all numeric parameters are usable.
    pub fn validate(&self) -> ScratchResult<()> {
        if self.gradient.is_empty() {
            return Err(ScratchError::validation(
                "surface gradient needs at least one stop",
            ));
        }
        let mut prev = 0.0;
        for (i, stop) in self.gradient.iter().enumerate() {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(ScratchError::validation(format!(
                    "gradient stop {i} offset must be in [0,1]"
                )));
            }
            if stop.offset < prev {
                return Err(ScratchError::validation(format!(
                    "gradient stop {i} offset must not decrease"
                )));
            }
            prev = stop.offset;
        }
        if let Some(s) = &self.sparkles
            && (!s.radius.is_finite() || s.radius <= 0.0)
        {
            return Err(ScratchError::validation(
                "sparkle radius must be finite and > 0",
            ));
        }
        if let Some(b) = &self.border
            && (!b.width.is_finite() || b.width <= 0.0 || !b.inset.is_finite() || b.inset < 0.0)
        {
            return Err(ScratchError::validation(
                "border width must be > 0 and inset >= 0",
            ));
        }
        if let Some(l) = &self.label
            && (!l.font_size.is_finite()
                || l.font_size <= 0.0
                || !l.letter_spacing.is_finite()
                || !l.offset_y.is_finite())
        {
            return Err(ScratchError::validation(
                "label font size must be > 0 and offsets finite",
            ));
        }
        Ok(())
    }
}

/// Named pairing of style, raster size and erase radius taken from the two card variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfacePreset {
    /// 400x400 gold foil card, radius 40.
    #[default]
    MultiStage,
    /// 300x300 medallion, radius 25.
    Circular,
}

impl SurfacePreset {
    /// Decorative style for this preset.
    pub fn style(self) -> SurfaceStyle {
        match self {
            Self::MultiStage => SurfaceStyle::multi_stage(),
            Self::Circular => SurfaceStyle::circular(),
        }
    }

    /// Raster `(width, height)` for this preset.
    pub fn raster_dims(self) -> (u32, u32) {
        match self {
            Self::MultiStage => (400, 400),
            Self::Circular => (300, 300),
        }
    }

    /// Erase radius in raster units.
    pub fn erase_radius(self) -> f64 {
        match self {
            Self::MultiStage => 40.0,
            Self::Circular => 25.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/surface_style.rs"]
mod tests;
