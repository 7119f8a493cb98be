//! CPU rasterization of the scene graph into an RGB frame.

mod cpu;
mod frame;

pub use cpu::{CpuRenderer, LightDirs};
pub use frame::FrameRgb;
