use super::*;
use crate::raster::coverage::evaluate_coverage;
use crate::style::color::ColorDef;

fn painted(w: u32, h: u32, style: &SurfaceStyle) -> Raster {
    let mut r = Raster::new(RasterSize::new(w, h).unwrap());
    paint_surface(&mut r, style).unwrap();
    r
}

#[test]
fn painted_presets_read_zero_coverage() {
    for style in [
        SurfaceStyle::multi_stage().without_label(),
        SurfaceStyle::circular().without_label(),
    ] {
        for (w, h) in [(1, 1), (3, 7), (64, 40), (400, 400)] {
            let r = painted(w, h, &style);
            assert_eq!(evaluate_coverage(&r), 0.0, "{w}x{h}");
            assert_eq!(r.transparent_pixels(), 0);
        }
    }
}

#[test]
fn labelled_surface_stays_opaque() {
    let r = painted(400, 400, &SurfaceStyle::multi_stage());
    assert_eq!(evaluate_coverage(&r), 0.0);
}

#[test]
fn paint_resets_mode_to_source_over() {
    let mut r = Raster::new(RasterSize::new(8, 8).unwrap());
    r.set_composite_mode(CompositeMode::DestinationOut);
    paint_surface(&mut r, &SurfaceStyle::circular().without_label()).unwrap();
    assert_eq!(r.composite_mode(), CompositeMode::SourceOver);
    assert_eq!(evaluate_coverage(&r), 0.0);
}

#[test]
fn gradient_runs_from_first_to_last_stop() {
    let style = SurfaceStyle {
        sparkles: None,
        border: None,
        label: None,
        ..SurfaceStyle::multi_stage()
    };
    let r = painted(100, 100, &style);
    let tl = r.pixel_at(0, 0).unwrap();
    let mid = r.pixel_at(50, 50).unwrap();
    let br = r.pixel_at(99, 99).unwrap();
    assert!((i32::from(tl.r) - 0xd4).abs() <= 3);
    assert!(mid.r >= 250 && mid.g >= 250 && mid.b >= 250);
    assert_eq!(mid.a, 255);
    assert!((i32::from(br.b) - 0x2d).abs() <= 3);
}

#[test]
fn gradient_ignores_stop_alpha() {
    let stops = [GradientStop {
        offset: 0.0,
        color: ColorDef::rgba(1.0, 0.0, 0.0, 0.2),
    }];
    assert_eq!(gradient_at(&stops, 0.7).to_array(), [255, 0, 0, 255]);
}

#[test]
fn sparkles_are_deterministic_per_seed() {
    let style = SurfaceStyle::multi_stage().without_label();
    let a = painted(64, 64, &style);
    let b = painted(64, 64, &style);
    assert_eq!(a.data(), b.data());

    let mut reseeded = style.clone();
    if let Some(s) = reseeded.sparkles.as_mut() {
        s.seed = 99;
    }
    let c = painted(64, 64, &reseeded);
    assert_ne!(a.data(), c.data());
}

#[test]
fn invalid_style_is_rejected_before_painting() {
    let mut style = SurfaceStyle::circular();
    style.gradient.clear();
    let mut r = Raster::new(RasterSize::new(4, 4).unwrap());
    assert!(paint_surface(&mut r, &style).is_err());
    assert_eq!(r.transparent_pixels(), 16);
}
