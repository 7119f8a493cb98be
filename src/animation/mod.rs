//! Easing, the time-of-day fan-out, and the scroll-to-animation mapper.

mod daynight;
mod ease;
mod scroll;

pub use daynight::{Atmosphere, ColorRamp, DayNight, Ramp, RampShape};
pub use ease::Ease;
pub use scroll::{ScrollDirection, ScrollInput, ScrollMapper, ScrollProgress};
