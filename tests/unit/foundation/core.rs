use super::*;

#[test]
fn scale_floors_each_component() {
    let s = Scale(1.5625); // 100 px wide skin
    assert_eq!(s.px(4), 6);
    assert_eq!(s.px(64), 100);
    assert_eq!(
        GridRect::new(4, 20, 4, 12).to_pixels(s),
        PixelRect::new(6, 31, 6, 18)
    );
}

#[test]
fn scale_one_is_identity() {
    let r = GridRect::new(50, 16, 2, 4);
    assert_eq!(r.to_pixels(Scale::ONE), PixelRect::new(50, 16, 2, 4));
}

#[test]
fn fractional_scale_can_collapse_rects() {
    assert!(GridRect::new(50, 16, 2, 4).to_pixels(Scale(0.25)).is_empty());
}

#[test]
fn rgba_len_detects_overflow() {
    assert_eq!(PixelRect::sized(3, 2).rgba_len(), Some(24));
    assert_eq!(PixelRect::sized(u32::MAX, u32::MAX).rgba_len(), None);
}

#[test]
fn model_type_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ModelType::Slim).unwrap(),
        "\"slim\""
    );
    assert_eq!(ModelType::Default.to_string(), "default");
    assert_eq!(SkinLayout::Legacy.to_string(), "legacy");
}
