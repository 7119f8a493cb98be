//! Tailfin renders an animated, scroll-driven 1959 highway illustration.
//!
//! The pipeline is procedural end to end:
//!
//! - A [`Spline`] defines the highway path; road surface, decals, and
//!   pillars derive from it deterministically.
//! - [`generate_props`](populate::generate_props) places city set-dressing
//!   from one seeded stream, rejecting anything inside the road corridor.
//! - Vehicles loop along the curve with lane offsets and odometer-driven
//!   wheel spin.
//! - One time-of-day scalar fans out to lighting, emissives, sky, and
//!   overlay opacity; a scroll mapper derives that scalar plus the eased
//!   page-transition ramps.
//! - A CPU rasterizer and a fixed post chain (painterly smoothing, edge
//!   darkening, paper grain, warm grade, vignette) produce the final frame.
//!
//! [`SceneSession`] owns the per-frame state and is the main entry point.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod actors;
pub mod animation;
pub mod assets;
pub mod curve;
pub mod foundation;
pub mod geometry;
pub mod populate;
pub mod post;
pub mod render;
pub mod scene;
pub mod session;

pub use crate::foundation::core::{Color, Viewport};
pub use crate::foundation::error::{TailfinError, TailfinResult};

pub use crate::actors::{CarClass, TrafficEntry, Vehicle};
pub use crate::animation::{Atmosphere, DayNight, Ease, ScrollInput, ScrollProgress};
pub use crate::curve::Spline;
pub use crate::populate::{Prop, PropKind};
pub use crate::render::FrameRgb;
pub use crate::scene::{SceneConfig, SceneMode};
pub use crate::session::SceneSession;
