use crate::animation::ease::Ease;

/// Quiet period after which `is_scrolling` clears, in seconds.
const DEBOUNCE_SECS: f64 = 0.15;

/// Raw scroll state read from the hosting environment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollInput {
    /// Vertical scroll offset in pixels.
    pub scroll_y: f32,
    /// Viewport height in pixels.
    pub viewport_h: f32,
    /// Full document height in pixels.
    pub document_h: f32,
    /// Hero section height in pixels.
    pub hero_h: f32,
}

/// Scroll movement direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    /// Offset increasing.
    #[default]
    Down,
    /// Offset decreasing.
    Up,
}

/// One immutable snapshot of every derived scroll quantity.
///
/// All ramps in a snapshot come from the same raw offset; consumers never
/// observe a half-updated mix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    /// Hero cover sliding out, `[0, 0.7 * hero_h]` window.
    pub hero_exit: f32,
    /// Magazine pages sliding in, `[0.1 * hero_h, 0.8 * hero_h]` window.
    pub entry_progress: f32,
    /// Hero returning over the last viewport of scroll.
    pub reveal_progress: f32,
    /// Eased whole-page ratio; the time-of-day source.
    pub page_progress: f32,
    /// Movement direction of the latest event.
    pub direction: ScrollDirection,
    /// True from any event until the debounce period passes quietly.
    pub is_scrolling: bool,
    /// Raw offset the snapshot was derived from.
    pub scroll_y: f32,
}

/// Maps raw scroll offsets into eased animation ramps.
///
/// The mapper itself is driven at most once per frame; coalescing of raw
/// events happens upstream in the session.
#[derive(Clone, Debug, Default)]
pub struct ScrollMapper {
    prev_scroll: f32,
    last_event: Option<f64>,
    snapshot: ScrollProgress,
}

impl ScrollMapper {
    /// Mapper with an all-zero initial snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> ScrollProgress {
        self.snapshot
    }

    /// Recompute the snapshot from a raw input at time `now` (seconds).
    pub fn recompute(&mut self, input: &ScrollInput, now: f64) -> ScrollProgress {
        let max_scroll = (input.document_h - input.viewport_h).max(0.0);

        let hero_exit = eased_ramp(input.scroll_y, 0.0, input.hero_h * 0.7);
        let entry_progress =
            eased_ramp(input.scroll_y, input.hero_h * 0.1, input.hero_h * 0.8);
        // A document no taller than the viewport cannot scroll; both
        // page-level ramps stay at rest instead of saturating.
        let (reveal_progress, page_progress) = if max_scroll > 0.0 {
            (
                eased_ramp(input.scroll_y, max_scroll - input.viewport_h, max_scroll),
                eased_ramp(input.scroll_y, 0.0, max_scroll),
            )
        } else {
            (0.0, 0.0)
        };

        let direction = if input.scroll_y > self.prev_scroll {
            ScrollDirection::Down
        } else if input.scroll_y < self.prev_scroll {
            ScrollDirection::Up
        } else {
            self.snapshot.direction
        };
        self.prev_scroll = input.scroll_y;
        self.last_event = Some(now);

        self.snapshot = ScrollProgress {
            hero_exit,
            entry_progress,
            reveal_progress,
            page_progress,
            direction,
            is_scrolling: true,
            scroll_y: input.scroll_y,
        };
        self.snapshot
    }

    /// Clear `is_scrolling` once the debounce period has passed quietly.
    ///
    /// This is the mapper's only wall-clock-driven transition; everything
    /// else moves on scroll events.
    pub fn settle(&mut self, now: f64) -> ScrollProgress {
        if let Some(last) = self.last_event
            && self.snapshot.is_scrolling
            && now - last >= DEBOUNCE_SECS
        {
            self.snapshot.is_scrolling = false;
        }
        self.snapshot
    }
}

/// Clamp `raw` into the `[start, end]` window, then ease-out-cubic.
///
/// A degenerate window maps to `0` rather than dividing toward NaN.
fn eased_ramp(raw: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return 0.0;
    }
    let linear = ((raw - start) / (end - start)).clamp(0.0, 1.0);
    Ease::OutCubic.apply(linear)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scroll.rs"]
mod tests;
