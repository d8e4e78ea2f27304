use super::*;

#[test]
fn raster_size_rejects_zero_edges() {
    assert!(RasterSize::new(0, 10).is_err());
    assert!(RasterSize::new(10, 0).is_err());
    assert!(RasterSize::new(MAX_RASTER_DIM + 1, 1).is_err());

    let s = RasterSize::new(400, 300).unwrap();
    assert_eq!(s.pixel_count(), 120_000);
    assert_eq!(s.byte_len(), 480_000);
}

#[test]
fn raster_size_deserialize_validates() {
    let ok: RasterSize = serde_json::from_str(r#"{"width": 4, "height": 2}"#).unwrap();
    assert_eq!((ok.width(), ok.height()), (4, 2));
    assert!(serde_json::from_str::<RasterSize>(r#"{"width": 0, "height": 2}"#).is_err());
}

#[test]
fn premul_from_straight_rounds() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8Premul::transparent().a, 0);
}

#[test]
fn solid_frame_fills_every_pixel() {
    let size = RasterSize::new(3, 2).unwrap();
    let f = FrameRGBA::solid(size, Rgba8Premul::from_straight_rgba(1, 2, 3, 255));
    assert_eq!(f.data.len(), 24);
    assert!(f.data.chunks_exact(4).all(|px| px == [1, 2, 3, 255]));
}

#[test]
fn frame_image_conversions_keep_opaque_pixels() {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([12, 34, 56, 255]));
    let frame = FrameRGBA::from_rgba_image(&img);
    assert!(frame.premultiplied);
    assert_eq!(frame.to_rgba_image().unwrap(), img);

    let broken = FrameRGBA {
        width: 3,
        height: 3,
        data: vec![0; 4],
        premultiplied: true,
    };
    assert!(broken.to_rgba_image().is_err());
}
