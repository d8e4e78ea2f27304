use super::*;
use crate::foundation::core::{Point, RasterSize, Rgba8Premul};
use crate::raster::surface::{CompositeMode, erase_disc};

fn opaque(w: u32, h: u32) -> Raster {
    let mut r = Raster::new(RasterSize::new(w, h).unwrap());
    r.set_composite_mode(CompositeMode::SourceOver);
    r.fill_with(|_, _| Rgba8Premul::from_straight_rgba(10, 20, 30, 255));
    r
}

#[test]
fn threshold_bounds() {
    assert!(CoverageThreshold::new(0.0).is_err());
    assert!(CoverageThreshold::new(1.0).is_err());
    assert!(CoverageThreshold::new(f64::NAN).is_err());
    assert_eq!(CoverageThreshold::default().get(), 0.45);
}

#[test]
fn threshold_is_strict() {
    let t = CoverageThreshold::default();
    assert!(!t.is_exceeded_by(0.45));
    assert!(t.is_exceeded_by(0.450001));
    assert!(!t.is_exceeded_by(0.0));
}

#[test]
fn threshold_serde_validates() {
    let t: CoverageThreshold = serde_json::from_str("0.6").unwrap();
    assert_eq!(t.get(), 0.6);
    assert!(serde_json::from_str::<CoverageThreshold>("1.5").is_err());
    assert_eq!(serde_json::to_string(&t).unwrap(), "0.6");
}

#[test]
fn opaque_raster_has_zero_coverage() {
    let r = opaque(17, 9);
    assert_eq!(evaluate_coverage(&r), 0.0);
    assert_eq!(CoverageStrategy::Incremental.measure(&r), 0.0);
}

#[test]
fn exactly_forty_five_percent_reads_as_point_four_five() {
    let mut r = opaque(100, 1);
    for x in 0..45 {
        erase_disc(&mut r, Point::new(f64::from(x) + 0.5, 0.5), 0.5);
    }
    let f = evaluate_coverage(&r);
    assert_eq!(f, 0.45);
    assert!(!CoverageThreshold::default().is_exceeded_by(f));

    erase_disc(&mut r, Point::new(45.5, 0.5), 0.5);
    assert!(CoverageThreshold::default().is_exceeded_by(evaluate_coverage(&r)));
}

#[test]
fn strategies_agree_after_overlapping_strokes() {
    let mut r = opaque(64, 48);
    let centres = [(10.0, 10.0), (14.0, 12.0), (60.0, 40.0), (-3.0, 20.0), (32.0, 24.0)];
    let mut prev = 0.0;
    for (x, y) in centres {
        erase_disc(&mut r, Point::new(x, y), 9.0);
        let full = CoverageStrategy::FullScan.measure(&r);
        let inc = CoverageStrategy::Incremental.measure(&r);
        assert_eq!(full, inc);
        assert!(full >= prev);
        prev = full;
    }
}
