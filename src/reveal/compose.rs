use crate::foundation::core::FrameRGBA;
use crate::foundation::error::{ScratchError, ScratchResult};
use crate::foundation::math::over_px;
use crate::reveal::surface::ScratchSurface;
use crate::style::surface_style::SurfaceShape;

impl<T> ScratchSurface<T> {
    /// Flatten the overlay over a rendered content frame of the same size.
    ///
    /// `content` must be premultiplied. Once revealed the overlay is hidden and the content passes
    /// through. For [`SurfaceShape::Circle`] everything outside the inscribed ellipse is transparent.
    pub fn compose_over(&self, content: &FrameRGBA) -> ScratchResult<FrameRGBA> {
        let raster = self.raster();
        if content.width != raster.width() || content.height != raster.height() {
            return Err(ScratchError::validation(format!(
                "content frame {}x{} does not match raster {}x{}",
                content.width,
                content.height,
                raster.width(),
                raster.height()
            )));
        }
        if !content.premultiplied {
            return Err(ScratchError::validation(
                "content frame must be premultiplied",
            ));
        }
        if content.data.len() != raster.data().len() {
            return Err(ScratchError::validation("content frame byte len mismatch"));
        }

        let mut data = content.data.clone();
        if self.overlay_visible() {
            for (d, s) in data.chunks_exact_mut(4).zip(raster.data().chunks_exact(4)) {
                let out = over_px([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }

        if self.style().shape == SurfaceShape::Circle {
            clip_to_ellipse(&mut data, raster.width(), raster.height());
        }

        Ok(FrameRGBA {
            width: content.width,
            height: content.height,
            data,
            premultiplied: true,
        })
    }
}

fn clip_to_ellipse(data: &mut [u8], width: u32, height: u32) {
    let rx = f64::from(width) / 2.0;
    let ry = f64::from(height) / 2.0;
    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = (i % width as usize) as f64 + 0.5;
        let y = (i / width as usize) as f64 + 0.5;
        let nx = (x - rx) / rx;
        let ny = (y - ry) / ry;
        if nx * nx + ny * ny > 1.0 {
            px.fill(0);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/compose.rs"]
mod tests;
