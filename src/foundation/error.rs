//! The crate-wide error type and result alias.

/// Crate-wide result alias.
pub type TailfinResult<T> = Result<T, TailfinError>;

/// Error taxonomy for scene construction and rendering.
///
/// Construction-time data errors (`Validation`, `Geometry`, `Scene`) are fatal
/// to the scene instance that raised them. Runtime numeric guards never
/// surface here; they recover locally and keep the previous derived value.
#[derive(thiserror::Error, Debug)]
pub enum TailfinError {
    /// Invalid configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Degenerate or inconsistent generated geometry.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Scene assembly failure.
    #[error("scene error: {0}")]
    Scene(String),

    /// Rasterization or post-processing failure.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TailfinError {
    /// Build a [`TailfinError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TailfinError::Geometry`].
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`TailfinError::Scene`].
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`TailfinError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
