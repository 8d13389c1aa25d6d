//! End-to-end scenarios through the public API.

use pixelforge::*;

#[test]
fn resize_width_only_derives_height() {
    let plan = plan(
        Size::new(800, 600),
        Size::new(400, 0),
        KeepProportion::Resize,
        CropAnchor::Center,
        0,
        PadColor::BLACK,
    )
    .unwrap();
    assert_eq!(plan.resample_to, Size::new(400, 300));
}

#[test]
fn pad_into_square_at_div_8() {
    let plan = FitRequest::new(KeepProportion::Pad, 512, 512)
        .divisible_by(8)
        .plan(1000, 500)
        .unwrap();
    assert_eq!(plan.resample_to, Size::new(512, 256));
    assert_eq!(plan.post_pad, Some(Insets::new(0, 0, 128, 128)));
    assert_eq!(plan.final_size, Size::new(512, 512));
}

#[test]
fn crop_1080p_to_square() {
    let plan = FitRequest::new(KeepProportion::Crop, 1024, 1024)
        .plan(1920, 1080)
        .unwrap();
    assert_eq!(plan.pre_crop, Some(Rect::new(420, 0, 1080, 1080)));
    assert_eq!(plan.resample_to, Size::new(1024, 1024));
}

#[test]
fn square_catalog_one_megapixel() {
    let all = enumerate_all(AspectRatio::SQUARE, 16, 1.0);
    assert!(all.contains(&Resolution::new(1024, 1024)));
    assert!(!all.contains(&Resolution::new(1040, 1040)));
}

#[test]
fn malformed_pad_color_is_black() {
    assert_eq!(PadColor::parse("abc"), PadColor::rgb(0, 0, 0));
    assert_eq!(PadColor::parse("abc").unit_rgb(), Some([0.0, 0.0, 0.0]));
}

#[test]
fn zero_area_source_is_the_only_error() {
    let err = FitRequest::default().plan(0, 100).unwrap_err();
    assert_eq!(err, PlanError::InvalidSource { width: 0, height: 100 });
    assert_eq!(err.to_string(), "source image has zero area (0x100)");
}

#[test]
fn catalog_selection_seeds_a_crop_plan() {
    let cfg = CatalogConfig {
        aspect: AspectRatio::WIDE_16_9,
        orientation: Orientation::Portrait,
        divisible_by: 16,
        max_megapixels: 2.0,
    };
    // 16k × 9k under 2 MP: k = 112 is the largest multiple of 16.
    let list = cfg.resolutions();
    let largest = *list.last().unwrap();
    assert_eq!(largest, Resolution::new(1008, 1792));
    assert_eq!(largest.to_string(), "1008×1792");

    // A landscape-written choice is re-oriented by forge.
    let picked: Resolution = "1792×1008".parse().unwrap();
    let sel = cfg.forge(picked);
    assert_eq!(sel.resolution(), largest);
    assert_eq!(sel.megapixels, 1.7227);

    let plan = FitRequest::from_selection(KeepProportion::Crop, &sel)
        .plan(3000, 3000)
        .unwrap();
    assert_eq!(plan.final_size, Size::new(1008, 1792));
    // 3000 * 1008 / 1792 = 1687.5, rounded away from zero
    assert_eq!(plan.pre_crop, Some(Rect::new(656, 0, 1688, 3000)));
}

#[test]
fn text_inputs_drive_a_plan() {
    let policy: KeepProportion = "pad_edge".parse().unwrap();
    let anchor: CropAnchor = "bottom".parse().unwrap();
    let method: ResampleMethod = "lanczos".parse().unwrap();
    let color: PadColor = "12, 34, 56".parse().unwrap();

    let plan = FitRequest::new(policy, 64, 64)
        .anchor(anchor)
        .pad_color(color)
        .plan(128, 32)
        .unwrap();
    assert_eq!(plan.post_pad, Some(Insets::new(0, 0, 48, 0)));
    assert_eq!(plan.pad_fill, PadColor::Edge);
    assert_eq!(method, ResampleMethod::default());
}
