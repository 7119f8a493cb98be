use super::*;
use crate::foundation::core::Color;

#[test]
fn linear_ramp_endpoints_are_exact() {
    let ramp = Ramp::linear(0.6, 0.18);
    assert_eq!(ramp.value(0.0), 0.6);
    assert_eq!(ramp.value(1.0), 0.18);
    assert_eq!(ramp.value(-0.5), 0.6);
    assert_eq!(ramp.value(2.0), 0.18);
}

#[test]
fn linear_ramp_is_monotonic() {
    let ramp = Ramp::linear(0.0, 1.0);
    let mut last = ramp.value(0.0);
    for i in 1..=20 {
        let v = ramp.value(i as f32 / 20.0);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn gated_ramp_is_exactly_zero_through_the_gate() {
    let headlight = Ramp::gated(0.0, 1.25, 0.4);
    assert_eq!(headlight.value(0.0), 0.0);
    assert_eq!(headlight.value(0.2), 0.0);
    assert_eq!(headlight.value(0.4), 0.0);
    assert!(headlight.value(0.40001) > 0.0);
    assert!(headlight.value(0.7) > 0.0);
    assert_eq!(headlight.value(1.0), 1.25);
}

#[test]
fn gated_ramp_keeps_its_day_value_below_the_gate() {
    let taillight = Ramp::gated(0.3, 1.0, 0.4);
    assert_eq!(taillight.value(0.0), 0.3);
    assert_eq!(taillight.value(0.4), 0.3);
    assert!(taillight.value(0.5) > 0.3);
    assert_eq!(taillight.value(1.0), 1.0);
}

#[test]
fn color_ramp_endpoints_are_exact() {
    let ramp = ColorRamp {
        day: Color::new(0.5, 0.75, 0.71),
        night: Color::new(0.06, 0.1, 0.2),
    };
    assert_eq!(ramp.value(0.0), ramp.day);
    assert_eq!(ramp.value(1.0), ramp.night);
}

#[test]
fn fan_out_reaches_every_consumer() {
    let daynight = crate::scene::SceneConfig::vintage_1959().daynight;

    let day = daynight.fan_out(0.0);
    assert_eq!(day.ambient, daynight.ambient.day);
    assert_eq!(day.sky_top, daynight.sky_top.day);
    assert_eq!(day.headlight, 0.0);
    assert_eq!(day.street_lamp, 0.0);
    assert_eq!(day.window, 0.0);

    let night = daynight.fan_out(1.0);
    assert_eq!(night.ambient, daynight.ambient.night);
    assert_eq!(night.background, daynight.background.night);
    assert!(night.headlight > 0.0);
    assert!(night.street_lamp > 0.0);
    assert!(night.window > 0.0);

    // Below every gate, all gated emissives are still dark.
    let dusk = daynight.fan_out(0.29);
    assert_eq!(dusk.headlight, 0.0);
    assert_eq!(dusk.street_lamp, 0.0);
    assert_eq!(dusk.window, 0.0);
    // Past the last gate they are all on.
    let evening = daynight.fan_out(0.5);
    assert!(evening.headlight > 0.0);
    assert!(evening.street_lamp > 0.0);
    assert!(evening.window > 0.0);
}
