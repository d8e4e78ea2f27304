use crate::foundation::core::Point;

/// Press tracking for a single contact point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    /// No button or finger down; moves are ignored.
    #[default]
    Idle,
    /// Pressing; `last` is the most recent raster-space position seen while pressed.
    Pressing {
        /// Last mapped position, if any move has arrived since the press.
        last: Option<Point>,
    },
}

impl PointerState {
    /// Whether moves should erase.
    pub fn is_pressing(self) -> bool {
        matches!(self, Self::Pressing { .. })
    }

    /// Last raster-space position while pressing.
    pub fn last_position(self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Pressing { last } => last,
        }
    }

    pub(crate) fn press(&mut self) {
        // A second press while pressing (another finger) keeps the first contact's track.
        if !self.is_pressing() {
            *self = Self::Pressing { last: None };
        }
    }

    pub(crate) fn release(&mut self) {
        *self = Self::Idle;
    }

    pub(crate) fn track(&mut self, pos: Point) {
        if let Self::Pressing { last } = self {
            *last = Some(pos);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/pointer.rs"]
mod tests;
