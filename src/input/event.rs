use crate::foundation::core::Point;
use serde::{Deserialize, Serialize};

/// Host-native input as delivered by a mouse or touch screen, in display coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Primary button pressed over the surface.
    MouseDown,
    /// Mouse moved over the surface.
    MouseMove {
        /// Client x.
        x: f64,
        /// Client y.
        y: f64,
    },
    /// Primary button released.
    MouseUp,
    /// Mouse left the surface bounds.
    MouseLeave,
    /// First finger touched the surface.
    TouchStart,
    /// Touch points moved; only the first contact is honoured.
    TouchMove {
        /// Active contact points, in the order the platform reports them.
        #[serde(default)]
        touches: Vec<Point>,
    },
    /// Last finger lifted.
    TouchEnd,
    /// Platform cancelled the touch sequence.
    TouchCancel,
}

/// Logical pointer event consumed by the scratch state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button down or touch start.
    PressStart,
    /// Pointer moved; `None` when the native event carried no usable position.
    Move(Option<Point>),
    /// Button up, touch end or touch cancel.
    PressEnd,
    /// Pointer left the surface bounds.
    Leave,
}

impl InputEvent {
    /// Collapse mouse and touch input into the logical press/move/release vocabulary.
    pub fn normalize(&self) -> PointerEvent {
        match self {
            Self::MouseDown | Self::TouchStart => PointerEvent::PressStart,
            Self::MouseMove { x, y } => PointerEvent::Move(Some(Point::new(*x, *y))),
            Self::TouchMove { touches } => PointerEvent::Move(touches.first().copied()),
            Self::MouseUp | Self::TouchEnd | Self::TouchCancel => PointerEvent::PressEnd,
            Self::MouseLeave => PointerEvent::Leave,
        }
    }
}

impl From<&InputEvent> for PointerEvent {
    fn from(ev: &InputEvent) -> Self {
        ev.normalize()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/event.rs"]
mod tests;
