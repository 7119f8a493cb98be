use super::*;

const HERO_H: f32 = 800.0;
const VIEWPORT_H: f32 = 800.0;
const DOCUMENT_H: f32 = 4800.0;
const MAX_SCROLL: f32 = DOCUMENT_H - VIEWPORT_H;

fn input(scroll_y: f32) -> ScrollInput {
    ScrollInput {
        scroll_y,
        viewport_h: VIEWPORT_H,
        document_h: DOCUMENT_H,
        hero_h: HERO_H,
    }
}

#[test]
fn rest_position_yields_zero_ramps() {
    let mut mapper = ScrollMapper::new();
    let snap = mapper.recompute(&input(0.0), 0.0);
    assert_eq!(snap.hero_exit, 0.0);
    assert_eq!(snap.entry_progress, 0.0);
    assert_eq!(snap.reveal_progress, 0.0);
    assert_eq!(snap.page_progress, 0.0);
    assert_eq!(snap.scroll_y, 0.0);
}

#[test]
fn hero_exit_saturates_at_its_window_end() {
    let mut mapper = ScrollMapper::new();
    let snap = mapper.recompute(&input(HERO_H * 0.7), 0.0);
    assert_eq!(snap.hero_exit, 1.0);
    assert!(snap.entry_progress < 1.0);
    assert_eq!(snap.reveal_progress, 0.0);
}

#[test]
fn reveal_saturates_at_max_scroll() {
    let mut mapper = ScrollMapper::new();
    let snap = mapper.recompute(&input(MAX_SCROLL), 0.0);
    assert_eq!(snap.reveal_progress, 1.0);
    assert_eq!(snap.page_progress, 1.0);
    assert_eq!(snap.hero_exit, 1.0);
}

#[test]
fn ramps_clamp_outside_their_windows() {
    let mut mapper = ScrollMapper::new();
    for y in [-500.0f32, 0.0, 123.0, MAX_SCROLL, MAX_SCROLL + 5000.0] {
        let snap = mapper.recompute(&input(y), 0.0);
        for v in [
            snap.hero_exit,
            snap.entry_progress,
            snap.reveal_progress,
            snap.page_progress,
        ] {
            assert!((0.0..=1.0).contains(&v), "scroll {y} produced {v}");
        }
    }
}

#[test]
fn ramps_are_eased_not_linear() {
    let mut mapper = ScrollMapper::new();
    let snap = mapper.recompute(&input(HERO_H * 0.35), 0.0);
    // Halfway through the hero window, ease-out-cubic sits well above 0.5.
    assert!((snap.hero_exit - 0.875).abs() < 1e-3);
}

#[test]
fn direction_follows_offset_changes() {
    let mut mapper = ScrollMapper::new();
    mapper.recompute(&input(100.0), 0.0);
    assert_eq!(mapper.snapshot().direction, ScrollDirection::Down);
    mapper.recompute(&input(50.0), 0.1);
    assert_eq!(mapper.snapshot().direction, ScrollDirection::Up);
    // Same offset keeps the previous direction.
    mapper.recompute(&input(50.0), 0.2);
    assert_eq!(mapper.snapshot().direction, ScrollDirection::Up);
}

#[test]
fn is_scrolling_debounces_on_the_injected_clock() {
    let mut mapper = ScrollMapper::new();
    mapper.recompute(&input(10.0), 1.0);
    assert!(mapper.snapshot().is_scrolling);

    // Quiet for less than the debounce window: still scrolling.
    assert!(mapper.settle(1.1).is_scrolling);
    // New event resets the timer.
    mapper.recompute(&input(20.0), 1.12);
    assert!(mapper.settle(1.2).is_scrolling);
    // Quiet past the window: cleared.
    assert!(!mapper.settle(1.3).is_scrolling);
}

#[test]
fn degenerate_document_height_never_divides_to_nan() {
    let mut mapper = ScrollMapper::new();
    let snap = mapper.recompute(
        &ScrollInput {
            scroll_y: 50.0,
            viewport_h: 800.0,
            document_h: 600.0,
            hero_h: 0.0,
        },
        0.0,
    );
    assert_eq!(snap.hero_exit, 0.0);
    assert_eq!(snap.entry_progress, 0.0);
    assert_eq!(snap.reveal_progress, 0.0);
    assert_eq!(snap.page_progress, 0.0);
    assert!(snap.hero_exit.is_finite());
}
