use super::*;
use crate::foundation::core::Color;

fn gradient_frame(w: u32, h: u32) -> FrameRgb {
    let mut frame = FrameRgb::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = x as f32 / w.max(1) as f32;
            frame.set_pixel(x, y, [v, 0.5, 1.0 - v]);
        }
    }
    frame
}

#[test]
fn default_chain_has_the_fixed_pass_order() {
    let chain = PostChain::from_settings(&PostSettings::default());
    assert_eq!(chain.len(), 7);
    assert!(!chain.is_empty());
}

#[test]
fn disabled_settings_build_an_empty_chain() {
    let settings = PostSettings {
        enabled: false,
        ..PostSettings::default()
    };
    let chain = PostChain::from_settings(&settings);
    assert!(chain.is_empty());

    let frame = gradient_frame(8, 8);
    let out = chain.apply(frame.clone(), &PassCtx::default()).unwrap();
    assert_eq!(out, frame);
}

#[test]
fn chain_preserves_dimensions_and_bounds() {
    let chain = PostChain::from_settings(&PostSettings::default());
    let out = chain
        .apply(gradient_frame(40, 30), &PassCtx::default())
        .unwrap();
    assert_eq!((out.width(), out.height()), (40, 30));
    assert!(out.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn chain_is_deterministic_for_a_fixed_context() {
    let chain = PostChain::from_settings(&PostSettings::default());
    let ctx = PassCtx {
        time_secs: 2.5,
        noise_seed: 77,
    };
    let a = chain.apply(gradient_frame(24, 18), &ctx).unwrap();
    let b = chain.apply(gradient_frame(24, 18), &ctx).unwrap();
    assert_eq!(a, b);
}

#[test]
fn chain_tolerates_out_of_range_input() {
    let chain = PostChain::from_settings(&PostSettings::default());
    let mut frame = FrameRgb::filled(8, 8, Color::new(0.5, 0.5, 0.5));
    frame.set_pixel(3, 3, [4.0, -2.0, 0.5]);
    let out = chain.apply(frame, &PassCtx::default()).unwrap();
    assert!(out.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn map_pixels_clamps_and_keeps_shape() {
    let frame = gradient_frame(10, 5);
    let out = map_pixels(&frame, |_x, _y, c| [c[0] * 2.0, c[1], -1.0]);
    assert_eq!((out.width(), out.height()), (10, 5));
    assert!(out.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert_eq!(out.pixel(0, 0)[2], 0.0);
}
