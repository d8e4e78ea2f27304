use crate::foundation::error::{ScratchError, ScratchResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

pub use kurbo::{Point, Rect};

/// Largest raster edge accepted by the painter (the overlay pixmap is `u16`-addressed).
pub const MAX_RASTER_DIM: u32 = u16::MAX as u32;

/// Fixed raster dimensions in pixels.
///
/// Both edges are non-zero, so coverage fractions are always well defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RasterSizeDef")]
pub struct RasterSize {
    width: u32,
    height: u32,
}

#[derive(serde::Deserialize)]
struct RasterSizeDef {
    width: u32,
    height: u32,
}

impl TryFrom<RasterSizeDef> for RasterSize {
    type Error = ScratchError;

    fn try_from(def: RasterSizeDef) -> ScratchResult<Self> {
        Self::new(def.width, def.height)
    }
}

impl RasterSize {
    /// Create a validated size with `0 < width, height <= MAX_RASTER_DIM`.
    pub fn new(width: u32, height: u32) -> ScratchResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScratchError::validation(format!(
                "raster size must be non-zero, got {width}x{height}"
            )));
        }
        if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
            return Err(ScratchError::validation(format!(
                "raster size too large: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Size from compile-time preset dimensions, which are always in range.
    pub(crate) const fn from_preset_dims(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0 && width <= MAX_RASTER_DIM && height <= MAX_RASTER_DIM);
        Self { width, height }
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Length of a tightly packed RGBA8 buffer of this size.
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A composed frame as RGBA8 pixels.
///
/// Frames handed to and returned from the surface are **premultiplied alpha**; the flag makes this
/// explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A fully transparent premultiplied frame.
    pub fn transparent(size: RasterSize) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
            data: vec![0; size.byte_len()],
            premultiplied: true,
        }
    }

    /// A frame filled with one premultiplied color.
    pub fn solid(size: RasterSize, color: Rgba8Premul) -> Self {
        let mut data = vec![0; size.byte_len()];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
        Self {
            width: size.width(),
            height: size.height(),
            data,
            premultiplied: true,
        }
    }

    /// Premultiplied frame from a straight-alpha image.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let mut data = img.as_raw().clone();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width: img.width(),
            height: img.height(),
            data,
            premultiplied: true,
        }
    }

    /// Straight-alpha copy for encoding.
    pub fn to_rgba_image(&self) -> ScratchResult<image::RgbaImage> {
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut data);
        }
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| ScratchError::render("frame byte len does not match its size"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
