use super::*;
use crate::foundation::core::Color;
use crate::post::{GradeSettings, PassCtx};

#[test]
fn warmth_pushes_red_up_and_blue_down() {
    let frame = FrameRgb::filled(4, 4, Color::new(0.5, 0.5, 0.5));
    let out = WarmGradePass::new(GradeSettings::default()).apply(&frame, &PassCtx::default());
    let p = out.pixel(2, 2);
    assert!(p[0] > p[1]);
    assert!(p[1] > p[2]);
}

#[test]
fn warm_grade_matches_its_formula() {
    let settings = GradeSettings {
        warmth: 0.4,
        fade: 0.1,
        ..GradeSettings::default()
    };
    let frame = FrameRgb::filled(1, 1, Color::new(0.5, 0.5, 0.5));
    let out = WarmGradePass::new(settings).apply(&frame, &PassCtx::default());
    let p = out.pixel(0, 0);

    let fade = 0.1 * 0.1;
    let expect_r = (0.5 * 1.04) * (1.0 - fade) + 0.95 * fade;
    let expect_b = (0.5 * (1.0 - 0.032)) * (1.0 - fade) + 0.88 * fade;
    assert!((p[0] - expect_r).abs() < 1e-5);
    assert!((p[2] - expect_b).abs() < 1e-5);
}

#[test]
fn saturation_spreads_channels_around_luma() {
    let frame = FrameRgb::filled(4, 4, Color::new(0.7, 0.4, 0.3));
    let settings = GradeSettings {
        saturation: 0.35,
        brightness: 0.0,
        contrast: 0.0,
        ..GradeSettings::default()
    };
    let out = ColorAdjustPass::new(settings).apply(&frame, &PassCtx::default());
    let p = out.pixel(1, 1);
    // Channels move away from the luma, widening the spread.
    assert!(p[0] > 0.7 - 1e-4);
    assert!(p[2] < 0.3 + 1e-4);
    assert!(p[0] - p[2] > 0.4);
}

#[test]
fn brightness_and_contrast_shift_and_stretch() {
    let settings = GradeSettings {
        saturation: 0.0,
        brightness: 0.1,
        contrast: 0.0,
        ..GradeSettings::default()
    };
    let frame = FrameRgb::filled(2, 2, Color::new(0.5, 0.5, 0.5));
    let out = ColorAdjustPass::new(settings).apply(&frame, &PassCtx::default());
    assert!((out.pixel(0, 0)[0] - 0.6).abs() < 1e-5);

    let stretch = GradeSettings {
        saturation: 0.0,
        brightness: 0.0,
        contrast: 0.5,
        ..GradeSettings::default()
    };
    let mut frame = FrameRgb::new(2, 1);
    frame.set_pixel(0, 0, [0.25, 0.25, 0.25]);
    frame.set_pixel(1, 0, [0.75, 0.75, 0.75]);
    let out = ColorAdjustPass::new(stretch).apply(&frame, &PassCtx::default());
    assert!((out.pixel(0, 0)[0] - 0.125).abs() < 1e-5);
    assert!((out.pixel(1, 0)[0] - 0.875).abs() < 1e-5);
}

#[test]
fn neutral_settings_are_identity() {
    let neutral = GradeSettings {
        warmth: 0.0,
        fade: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        contrast: 0.0,
    };
    let frame = FrameRgb::filled(4, 4, Color::new(0.3, 0.6, 0.9));
    let warmed = WarmGradePass::new(neutral).apply(&frame, &PassCtx::default());
    let adjusted = ColorAdjustPass::new(neutral).apply(&warmed, &PassCtx::default());
    for y in 0..4 {
        for x in 0..4 {
            let p = adjusted.pixel(x, y);
            assert!((p[0] - 0.3).abs() < 1e-5);
            assert!((p[1] - 0.6).abs() < 1e-5);
            assert!((p[2] - 0.9).abs() < 1e-5);
        }
    }
}
