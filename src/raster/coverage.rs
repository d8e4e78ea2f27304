use crate::foundation::error::{ScratchError, ScratchResult};
use crate::raster::surface::Raster;
use serde::{Deserialize, Serialize};

/// Default fraction of transparent pixels that completes a reveal.
pub const DEFAULT_THRESHOLD: f64 = 0.45;

/// Coverage fraction that must be strictly exceeded to complete a reveal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CoverageThreshold(f64);

impl CoverageThreshold {
    /// Create a validated threshold in the open interval `(0, 1)`.
    pub fn new(fraction: f64) -> ScratchResult<Self> {
        if !fraction.is_finite() || fraction <= 0.0 || fraction >= 1.0 {
            return Err(ScratchError::validation(format!(
                "coverage threshold must be in (0, 1), got {fraction}"
            )));
        }
        Ok(Self(fraction))
    }

    /// Threshold as a fraction.
    pub fn get(self) -> f64 {
        self.0
    }

    /// `true` when `fraction` is strictly above the threshold.
    pub fn is_exceeded_by(self, fraction: f64) -> bool {
        fraction > self.0
    }
}

impl Default for CoverageThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for CoverageThreshold {
    type Error = ScratchError;

    fn try_from(v: f64) -> ScratchResult<Self> {
        Self::new(v)
    }
}

impl From<CoverageThreshold> for f64 {
    fn from(t: CoverageThreshold) -> f64 {
        t.0
    }
}

/// How a surface measures coverage after each stroke.
///
/// Both strategies produce the same exact count; `Incremental` reads the raster's running
/// counter instead of rescanning the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStrategy {
    /// Read back the whole buffer on every evaluation.
    #[default]
    FullScan,
    /// Use the transparent-pixel counter maintained by raster writes.
    Incremental,
}

impl CoverageStrategy {
    /// Coverage fraction of `raster` measured with this strategy.
    pub fn measure(self, raster: &Raster) -> f64 {
        match self {
            Self::FullScan => evaluate_coverage(raster),
            Self::Incremental => {
                coverage_fraction(raster.transparent_pixels(), raster.size().pixel_count())
            }
        }
    }
}

/// Fraction of pixels in `raster` whose alpha is exactly 0, in `[0, 1]`.
///
/// Reads the full buffer; cost is `O(width * height)`.
pub fn evaluate_coverage(raster: &Raster) -> f64 {
    coverage_fraction(raster.scan_transparent_pixels(), raster.size().pixel_count())
}

fn coverage_fraction(transparent: u64, total: u64) -> f64 {
    // `RasterSize` guarantees `total > 0`.
    (transparent as f64) / (total as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/coverage.rs"]
mod tests;
