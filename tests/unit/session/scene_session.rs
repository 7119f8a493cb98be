use super::*;
use crate::scene::SceneConfig;

fn small_session() -> SceneSession {
    let mut config = SceneConfig::vintage_1959();
    // Keep unit runs quick without changing behavior under test.
    config.road.segments = 40;
    config.traffic.truncate(4);
    config.population.regions.truncate(2);
    config.post.smoothing_radius = 1;
    SceneSession::new(config, Viewport::new(48, 32).unwrap()).unwrap()
}

fn page_scroll(scroll_y: f32) -> ScrollInput {
    ScrollInput {
        scroll_y,
        viewport_h: 800.0,
        document_h: 4800.0,
        hero_h: 800.0,
    }
}

#[test]
fn advancement_uses_elapsed_wall_clock_time() {
    let mut steady = small_session();
    steady.advance(0.0);
    for i in 1..=10 {
        steady.advance(f64::from(i) * 0.1);
    }

    let mut gappy = small_session();
    gappy.advance(0.0);
    gappy.advance(1.0);

    // One second either way lands the vehicles in the same place.
    for (a, b) in steady.vehicles().iter().zip(gappy.vehicles()) {
        assert!((a.t - b.t).abs() < 1e-4);
    }
}

#[test]
fn vehicles_progress_between_frames() {
    let mut session = small_session();
    session.advance(0.0);
    let before: Vec<f32> = session.vehicles().iter().map(|v| v.t).collect();
    session.advance(2.0);
    for (v, b) in session.vehicles().iter().zip(before) {
        assert!(v.t != b || v.speed == 0.0);
        assert!(v.odometer > 0.0);
    }
}

#[test]
fn scroll_events_coalesce_to_one_recomputation() {
    let mut session = small_session();
    session.on_scroll(page_scroll(100.0));
    session.on_scroll(page_scroll(900.0));
    session.advance(0.0);

    // Only the latest input survives.
    let snap = session.scroll_progress();
    assert_eq!(snap.scroll_y, 900.0);

    // Without new events the snapshot's ramps stay put.
    session.advance(0.05);
    assert_eq!(session.scroll_progress().scroll_y, 900.0);
}

#[test]
fn time_of_day_follows_the_page_ramp() {
    let mut session = small_session();
    assert_eq!(session.time_of_day(), 0.0);

    session.on_scroll(page_scroll(0.0));
    session.advance(0.0);
    assert_eq!(session.time_of_day(), 0.0);

    session.on_scroll(page_scroll(4000.0));
    session.advance(0.1);
    assert_eq!(session.time_of_day(), 1.0);

    let atmos = session.atmosphere();
    assert!(atmos.headlight > 0.0);
}

#[test]
fn is_scrolling_clears_after_the_quiet_period() {
    let mut session = small_session();
    session.on_scroll(page_scroll(50.0));
    session.advance(1.0);
    assert!(session.scroll_progress().is_scrolling);

    let snap = session.advance(1.3);
    assert!(!snap.is_scrolling);
}

#[test]
fn mode_toggle_is_the_only_discrete_state() {
    let mut session = small_session();
    assert_eq!(session.mode(), SceneMode::Cover);
    session.set_mode(SceneMode::Explore);
    assert_eq!(session.mode(), SceneMode::Explore);
    session.set_mode(SceneMode::Cover);
    assert_eq!(session.mode(), SceneMode::Cover);
}

#[test]
fn render_produces_a_bounded_frame() {
    let mut session = small_session();
    session.on_pointer(0.25, -0.5);
    session.advance(0.0);
    session.advance(0.033);

    let frame = session.render().unwrap();
    assert_eq!((frame.width(), frame.height()), (48, 32));
    assert!(frame.data().iter().all(|&v| (0.0..=1.0).contains(&v)));

    session.resize(Viewport::new(20, 16).unwrap());
    let small = session.render().unwrap();
    assert_eq!((small.width(), small.height()), (20, 16));
}

#[test]
fn manual_time_of_day_override_holds_until_next_scroll() {
    let mut session = small_session();
    session.set_time_of_day(0.8);
    assert_eq!(session.time_of_day(), 0.8);
    session.advance(0.5);
    assert_eq!(session.time_of_day(), 0.8);

    session.on_scroll(page_scroll(0.0));
    session.advance(1.0);
    assert_eq!(session.time_of_day(), 0.0);
}
