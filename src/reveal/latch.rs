use crate::raster::coverage::CoverageThreshold;

/// One-way "revealed" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// A latch that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the latch has fired.
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feed one coverage measurement.
    ///
    /// Returns `true` only for the measurement that flips the latch; every later call returns
    /// `false` whatever the fraction.
    pub fn observe(&mut self, fraction: f64, threshold: CoverageThreshold) -> bool {
        if self.revealed || !threshold.is_exceeded_by(fraction) {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/latch.rs"]
mod tests;
