use crate::foundation::core::{FrameRGBA, Point, RasterSize, Rgba8Premul};
use crate::input::event::PointerEvent;
use crate::input::mapping::DisplayGeometry;
use crate::raster::coverage::CoverageThreshold;
use crate::reveal::surface::{ScratchOpts, ScratchSurface};
use crate::style::surface_style::{SurfacePreset, SurfaceStyle};

fn small(style: SurfaceStyle, threshold: f64) -> ScratchSurface<()> {
    let opts = ScratchOpts {
        size: RasterSize::new(40, 40).unwrap(),
        erase_radius: 6.0,
        ..ScratchOpts::for_preset(SurfacePreset::MultiStage)
    }
    .with_threshold(CoverageThreshold::new(threshold).unwrap());
    ScratchSurface::mount(opts, style.without_label(), (), || {}).unwrap()
}

fn content() -> FrameRGBA {
    FrameRGBA::solid(
        RasterSize::new(40, 40).unwrap(),
        Rgba8Premul::from_straight_rgba(10, 200, 30, 255),
    )
}

#[test]
fn overlay_hides_content_until_scratched() {
    let mut s = small(SurfaceStyle::multi_stage(), 0.9);
    let frame = s.compose_over(&content()).unwrap();
    assert_eq!(&frame.data[..], s.raster().data());

    let geom = DisplayGeometry::unscaled(s.opts().size);
    s.handle(PointerEvent::PressStart, geom);
    s.handle(PointerEvent::Move(Some(Point::new(20.0, 20.0))), geom);
    let frame = s.compose_over(&content()).unwrap();
    let i = (20 * 40 + 20) * 4;
    assert_eq!(&frame.data[i..i + 4], &[10, 200, 30, 255]);
    assert_eq!(&frame.data[..4], &s.raster().data()[..4]);
}

#[test]
fn revealed_surface_passes_content_through() {
    let mut s = small(SurfaceStyle::multi_stage(), 0.01);
    let geom = DisplayGeometry::unscaled(s.opts().size);
    s.handle(PointerEvent::PressStart, geom);
    s.handle(PointerEvent::Move(Some(Point::new(20.0, 20.0))), geom);
    assert!(s.is_revealed());
    let frame = s.compose_over(&content()).unwrap();
    assert_eq!(frame.data, content().data);
}

#[test]
fn circle_shape_clears_corners() {
    let s = small(SurfaceStyle::circular(), 0.9);
    let frame = s.compose_over(&content()).unwrap();
    assert_eq!(&frame.data[..4], &[0, 0, 0, 0]);
    let i = (20 * 40 + 20) * 4;
    assert_eq!(frame.data[i + 3], 255);
}

#[test]
fn rejects_mismatched_frames() {
    let s = small(SurfaceStyle::multi_stage(), 0.9);
    let wrong = FrameRGBA::transparent(RasterSize::new(10, 40).unwrap());
    assert!(s.compose_over(&wrong).is_err());

    let mut straight = content();
    straight.premultiplied = false;
    assert!(s.compose_over(&straight).is_err());
}
