use thiserror::Error;

/// Errors that can occur during photo capture operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("device unavailable: {0}")]
    DeviceUnavailable(String),

    /// The compositor was invoked before a position was resolved.
    /// A sequencing bug in the caller, not user-facing text.
    #[error("missing location")]
    MissingLocation,

    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("encode failed: {0}")]
    EncodeFailed(String),

    #[error("font unavailable: {0}")]
    FontUnavailable(String),

    #[error("share unsupported")]
    ShareUnsupported,

    #[error("share failed: {0}")]
    ShareFailed(String),

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),
}
