//! The frame-driven scene session.

mod scene_session;

pub use scene_session::SceneSession;
