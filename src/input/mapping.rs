use crate::foundation::core::{Point, RasterSize, Rect};
use serde::{Deserialize, Serialize};

/// Where the surface is currently drawn on screen, in display units.
///
/// Layout may scale the surface, so this is re-read for every event rather than cached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    /// Left edge of the rendered surface.
    pub left: f64,
    /// Top edge of the rendered surface.
    pub top: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl DisplayGeometry {
    /// Geometry with the given top-left corner and rendered size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Geometry that shows the raster 1:1 at the origin.
    pub fn unscaled(size: RasterSize) -> Self {
        Self::new(0.0, 0.0, f64::from(size.width()), f64::from(size.height()))
    }

    /// Geometry from a bounding rect.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Bounding rect.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }

    fn is_usable(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Map a client-space point into raster coordinates.
///
/// `raster = (client - origin) * (raster_size / display_size)` per axis. Returns `None` for a
/// degenerate geometry or a non-finite point. Points outside the surface map outside the raster;
/// erasing clips them.
pub fn map_to_raster(client: Point, geometry: DisplayGeometry, size: RasterSize) -> Option<Point> {
    if !geometry.is_usable() || !client.x.is_finite() || !client.y.is_finite() {
        return None;
    }
    let sx = f64::from(size.width()) / geometry.width;
    let sy = f64::from(size.height()) / geometry.height;
    Some(Point::new(
        (client.x - geometry.left) * sx,
        (client.y - geometry.top) * sy,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/input/mapping.rs"]
mod tests;
