use thiserror::Error;

/// Errors raised by the platform-independent scene logic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),
    #[error("parallax scale `{name}` must be finite, got {value}")]
    InvalidScale { name: &'static str, value: f32 },
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("unknown scene preset `{0}`")]
    UnknownPreset(String),
    #[error("malformed glb: {0}")]
    MalformedModel(&'static str),
    #[error("malformed hdr: {0}")]
    MalformedEnvironment(&'static str),
}
