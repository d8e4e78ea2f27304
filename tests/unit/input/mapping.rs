use super::*;

fn size(w: u32, h: u32) -> RasterSize {
    RasterSize::new(w, h).unwrap()
}

#[test]
fn unscaled_geometry_is_identity_after_offset() {
    let g = DisplayGeometry::new(10.0, 20.0, 400.0, 400.0);
    let p = map_to_raster(Point::new(110.0, 220.0), g, size(400, 400)).unwrap();
    assert_eq!(p, Point::new(100.0, 200.0));
}

#[test]
fn css_scaled_surface_maps_into_raster_units() {
    // 400px raster drawn at 320px (w-80 card).
    let g = DisplayGeometry::new(0.0, 0.0, 320.0, 320.0);
    let p = map_to_raster(Point::new(160.0, 80.0), g, size(400, 400)).unwrap();
    assert_eq!(p, Point::new(200.0, 100.0));
}

#[test]
fn axes_scale_independently() {
    let g = DisplayGeometry::new(0.0, 0.0, 200.0, 50.0);
    let p = map_to_raster(Point::new(100.0, 25.0), g, size(400, 400)).unwrap();
    assert_eq!(p, Point::new(200.0, 200.0));
}

#[test]
fn scale_invariance() {
    let raster = size(300, 300);
    let base = DisplayGeometry::new(5.0, 7.0, 300.0, 300.0);
    let client = Point::new(125.0, 67.0);
    let expected = map_to_raster(client, base, raster).unwrap();
    for k in [0.5, 2.0, 3.0] {
        let g = DisplayGeometry::new(5.0, 7.0, 300.0 * k, 300.0 * k);
        let scaled = Point::new(5.0 + (client.x - 5.0) * k, 7.0 + (client.y - 7.0) * k);
        let p = map_to_raster(scaled, g, raster).unwrap();
        assert!((p.x - expected.x).abs() < 1e-9 && (p.y - expected.y).abs() < 1e-9);
    }
}

#[test]
fn degenerate_geometry_or_point_yields_none() {
    let r = size(10, 10);
    let p = Point::new(1.0, 1.0);
    assert!(map_to_raster(p, DisplayGeometry::new(0.0, 0.0, 0.0, 10.0), r).is_none());
    assert!(map_to_raster(p, DisplayGeometry::new(0.0, 0.0, 10.0, -1.0), r).is_none());
    assert!(map_to_raster(p, DisplayGeometry::new(f64::NAN, 0.0, 10.0, 10.0), r).is_none());
    assert!(map_to_raster(Point::new(f64::INFINITY, 0.0), DisplayGeometry::unscaled(r), r).is_none());
}

#[test]
fn rect_round_trip() {
    let g = DisplayGeometry::from_rect(Rect::new(1.0, 2.0, 41.0, 22.0));
    assert_eq!(g, DisplayGeometry::new(1.0, 2.0, 40.0, 20.0));
    assert_eq!(g.to_rect(), Rect::new(1.0, 2.0, 41.0, 22.0));
}
