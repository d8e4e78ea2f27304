use crate::foundation::core::{Point, RasterSize, Rgba8Premul};
use crate::foundation::error::{ScratchError, ScratchResult};
use crate::foundation::math::{mul_div255_u8, over_px, unpremultiply_rgba8_in_place};

/// How new pixels combine with the raster.
///
/// Painting and erasing share the same buffer, so every operation sets the mode it needs before
/// touching pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Premultiplied source-over ("draw over").
    #[default]
    SourceOver,
    /// Destination scaled by inverse source alpha ("erase"); source color is ignored.
    DestinationOut,
}

/// Fixed-size premultiplied RGBA8 pixel buffer owned by one scratch surface.
///
/// Besides the pixels the raster maintains an exact count of fully transparent pixels, updated by
/// every write. [`Raster::scan_transparent_pixels`] recomputes the same number from scratch.
#[derive(Clone, Debug)]
pub struct Raster {
    size: RasterSize,
    data: Vec<u8>,
    mode: CompositeMode,
    transparent: u64,
}

impl Raster {
    /// Allocate a fully transparent raster.
    pub fn new(size: RasterSize) -> Self {
        Self {
            size,
            data: vec![0; size.byte_len()],
            mode: CompositeMode::default(),
            transparent: size.pixel_count(),
        }
    }

    /// Fixed dimensions.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Current composite mode.
    pub fn composite_mode(&self) -> CompositeMode {
        self.mode
    }

    /// Select the composite mode for subsequent writes.
    pub fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    /// Alpha of pixel `(x, y)`, or `None` outside the raster.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel_at(x, y).map(|px| px.a)
    }

    /// Pixel `(x, y)`, or `None` outside the raster.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }

    /// Running count of pixels with alpha 0.
    pub fn transparent_pixels(&self) -> u64 {
        self.transparent
    }

    /// Count pixels with alpha 0 by reading the whole buffer.
    pub fn scan_transparent_pixels(&self) -> u64 {
        self.data
            .chunks_exact(4)
            .filter(|px| px[3] == 0)
            .count() as u64
    }

    /// Composite a generated color into every pixel using the current mode.
    pub fn fill_with(&mut self, mut f: impl FnMut(u32, u32) -> Rgba8Premul) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let src = f(x, y);
                self.write(x, y, src.to_array());
            }
        }
    }

    /// Composite a same-size premultiplied RGBA8 layer using the current mode.
    pub fn composite_layer(&mut self, src: &[u8]) -> ScratchResult<()> {
        if src.len() != self.data.len() {
            return Err(ScratchError::render(format!(
                "layer byte len {} does not match raster {}x{}",
                src.len(),
                self.width(),
                self.height()
            )));
        }
        let w = self.width() as usize;
        for (i, s) in src.chunks_exact(4).enumerate() {
            if s[3] == 0 {
                continue;
            }
            let (x, y) = ((i % w) as u32, (i / w) as u32);
            self.write(x, y, [s[0], s[1], s[2], s[3]]);
        }
        Ok(())
    }

    /// Composite a hard-edged disc of `color` using the current mode.
    ///
    /// A pixel belongs to the disc when its centre `(x + 0.5, y + 0.5)` lies within `radius` of
    /// `center`. The disc is clipped to the raster; returns the number of pixels that became fully
    /// transparent.
    pub fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba8Premul) -> u64 {
        if !center.x.is_finite() || !center.y.is_finite() || !radius.is_finite() || radius < 0.0 {
            return 0;
        }
        let w = f64::from(self.width());
        let h = f64::from(self.height());
        let x0 = (center.x - radius - 0.5).floor().max(0.0);
        let x1 = (center.x + radius - 0.5).ceil().min(w - 1.0);
        let y0 = (center.y - radius - 0.5).floor().max(0.0);
        let y1 = (center.y + radius - 0.5).ceil().min(h - 1.0);
        if x0 > x1 || y0 > y1 {
            return 0;
        }

        let r2 = radius * radius;
        let before = self.transparent;
        for y in (y0 as u32)..=(y1 as u32) {
            let dy = f64::from(y) + 0.5 - center.y;
            for x in (x0 as u32)..=(x1 as u32) {
                let dx = f64::from(x) + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.write(x, y, color.to_array());
                }
            }
        }
        self.transparent.saturating_sub(before)
    }

    /// Straight-alpha copy for encoding.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        image::RgbaImage::from_raw(self.width(), self.height(), out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width(), self.height()))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width() as usize) + (x as usize)) * 4
    }

    fn write(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let i = self.index(x, y);
        let dst = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        let out = match self.mode {
            CompositeMode::SourceOver => over_px(dst, src),
            CompositeMode::DestinationOut => {
                let inv = 255u16 - u16::from(src[3]);
                [
                    mul_div255_u8(u16::from(dst[0]), inv),
                    mul_div255_u8(u16::from(dst[1]), inv),
                    mul_div255_u8(u16::from(dst[2]), inv),
                    mul_div255_u8(u16::from(dst[3]), inv),
                ]
            }
        };
        match (dst[3] == 0, out[3] == 0) {
            (false, true) => self.transparent += 1,
            (true, false) => self.transparent -= 1,
            _ => {}
        }
        self.data[i..i + 4].copy_from_slice(&out);
    }
}

/// Clear every pixel within `radius` of `center` to fully transparent.
///
/// Switches the raster to [`CompositeMode::DestinationOut`] first. Returns the number of pixels
/// that changed from non-transparent to transparent.
pub fn erase_disc(raster: &mut Raster, center: Point, radius: f64) -> u64 {
    raster.set_composite_mode(CompositeMode::DestinationOut);
    raster.fill_disc(center, radius, Rgba8Premul::from_straight_rgba(0, 0, 0, 255))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
