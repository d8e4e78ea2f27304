use crate::foundation::core::{RasterSize, Rgba8Premul};
use crate::foundation::error::{ScratchError, ScratchResult};
use crate::foundation::math::hash_unit;
use crate::raster::label::rasterize_label;
use crate::raster::surface::{CompositeMode, Raster};
use crate::style::surface_style::{BorderStyle, GradientStop, SparkleStyle, SurfaceStyle};
use vello_cpu::kurbo::Shape as _;

/// Paint the opaque decorative overlay onto `raster`.
///
/// Sets [`CompositeMode::SourceOver`] before drawing. The base gradient is opaque and every later
/// layer is composited over it, so the raster ends up with alpha 255 everywhere.
#[tracing::instrument(skip(raster, style), fields(w = raster.width(), h = raster.height()))]
pub fn paint_surface(raster: &mut Raster, style: &SurfaceStyle) -> ScratchResult<()> {
    style.validate()?;
    raster.set_composite_mode(CompositeMode::SourceOver);

    let size = raster.size();
    paint_gradient(raster, &style.gradient);

    if let Some(layer) = vector_layer(size, style.sparkles.as_ref(), style.border.as_ref())? {
        raster.composite_layer(&layer)?;
    }
    if let Some(label) = &style.label
        && let Some(layer) = rasterize_label(label, size)?
    {
        raster.composite_layer(&layer)?;
    }
    Ok(())
}

fn paint_gradient(raster: &mut Raster, stops: &[GradientStop]) {
    let w = f64::from(raster.width());
    let h = f64::from(raster.height());
    let len2 = w * w + h * h;
    raster.fill_with(|x, y| {
        // Project the pixel centre onto the (0,0) -> (w,h) diagonal.
        let px = f64::from(x) + 0.5;
        let py = f64::from(y) + 0.5;
        let t = ((px * w + py * h) / len2).clamp(0.0, 1.0);
        gradient_at(stops, t)
    });
}

fn gradient_at(stops: &[GradientStop], t: f64) -> Rgba8Premul {
    let opaque = |s: &GradientStop| s.color.with_alpha(1.0).to_rgba8_premul();

    let Some(first) = stops.first() else {
        return Rgba8Premul::from_straight_rgba(0, 0, 0, 255);
    };
    if t <= first.offset {
        return opaque(first);
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let k = if span <= 0.0 {
                1.0
            } else {
                (t - a.offset) / span
            };
            let (ca, cb) = (opaque(a), opaque(b));
            let lerp = |x: u8, y: u8| -> u8 {
                let xf = f64::from(x);
                let yf = f64::from(y);
                (xf + (yf - xf) * k).round().clamp(0.0, 255.0) as u8
            };
            return Rgba8Premul {
                r: lerp(ca.r, cb.r),
                g: lerp(ca.g, cb.g),
                b: lerp(ca.b, cb.b),
                a: 255,
            };
        }
    }
    stops.last().map(opaque).unwrap_or(opaque(first))
}

/// Sparkles and border, drawn with `vello_cpu` into a transparent overlay.
fn vector_layer(
    size: RasterSize,
    sparkles: Option<&SparkleStyle>,
    border: Option<&BorderStyle>,
) -> ScratchResult<Option<Vec<u8>>> {
    if sparkles.is_none() && border.is_none() {
        return Ok(None);
    }
    let w: u16 = size
        .width()
        .try_into()
        .map_err(|_| ScratchError::render("overlay width exceeds u16"))?;
    let h: u16 = size
        .height()
        .try_into()
        .map_err(|_| ScratchError::render("overlay height exceeds u16"))?;
    let (wf, hf) = (f64::from(w), f64::from(h));

    let mut ctx = vello_cpu::RenderContext::new(w, h);

    if let Some(s) = sparkles {
        ctx.set_paint(cpu_color(s.color.to_rgba8_straight()));
        for i in 0..u64::from(s.count) {
            let x = hash_unit(s.seed, i, 0) * wf;
            let y = hash_unit(s.seed, i, 1) * hf;
            let dot = vello_cpu::kurbo::Circle::new((x, y), s.radius);
            ctx.fill_path(&dot.to_path(0.1));
        }
    }

    if let Some(b) = border {
        let half = b.width / 2.0;
        let (x0, y0) = (b.inset - half, b.inset - half);
        let (x1, y1) = (wf - b.inset + half, hf - b.inset + half);
        if x1 - x0 > 2.0 * b.width && y1 - y0 > 2.0 * b.width {
            ctx.set_paint(cpu_color(b.color.to_rgba8_straight()));
            let bands = [
                (x0, y0, x1, y0 + b.width),
                (x0, y1 - b.width, x1, y1),
                (x0, y0 + b.width, x0 + b.width, y1 - b.width),
                (x1 - b.width, y0 + b.width, x1, y1 - b.width),
            ];
            for (l, t, r, bt) in bands {
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(l, t, r, bt));
            }
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(Some(pixmap.data_as_u8_slice().to_vec()))
}

fn cpu_color([r, g, b, a]: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/paint.rs"]
mod tests;
