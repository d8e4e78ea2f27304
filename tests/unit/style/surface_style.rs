use super::*;
use serde_json::json;

#[test]
fn presets_validate() {
    SurfaceStyle::multi_stage().validate().unwrap();
    SurfaceStyle::circular().validate().unwrap();
    assert_eq!(SurfacePreset::MultiStage.raster_dims(), (400, 400));
    assert_eq!(SurfacePreset::Circular.erase_radius(), 25.0);
    assert_eq!(SurfacePreset::Circular.style().shape, SurfaceShape::Circle);
}

#[test]
fn partial_json_falls_back_to_multi_stage_defaults() {
    let style: SurfaceStyle = serde_json::from_value(json!({
        "gradient": [{ "offset": 0.0, "color": "#112233" }],
        "shape": "circle"
    }))
    .unwrap();
    assert_eq!(style.gradient.len(), 1);
    assert_eq!(style.shape, SurfaceShape::Circle);
    assert_eq!(style.sparkles, SurfaceStyle::multi_stage().sparkles);
    assert!(style.label.is_some());
    style.validate().unwrap();
}

#[test]
fn validate_rejects_bad_gradients() {
    let mut s = SurfaceStyle::multi_stage();
    s.gradient.clear();
    assert!(s.validate().is_err());

    let mut s = SurfaceStyle::multi_stage();
    s.gradient.swap(0, 4);
    assert!(s.validate().is_err());

    let mut s = SurfaceStyle::multi_stage();
    s.gradient[2].offset = 1.5;
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_degenerate_decoration() {
    let mut s = SurfaceStyle::multi_stage();
    if let Some(sp) = s.sparkles.as_mut() {
        sp.radius = 0.0;
    }
    assert!(s.validate().is_err());

    let mut s = SurfaceStyle::multi_stage();
    if let Some(l) = s.label.as_mut() {
        l.font_size = f64::NAN;
    }
    assert!(s.validate().is_err());
}
