//! Error types for the Beacon emitter

use thiserror::Error;

/// Errors produced while building or publishing a message
#[derive(Error, Debug)]
pub enum BeaconError {
    // Build errors - raised before any transport activity
    #[error("\"{0}\" is a reserved event name")]
    ReservedEvent(String),

    #[error("acknowledgements are not supported by this emitter")]
    AckUnsupported,

    // Codec errors
    #[error("payload encoding failed: {0}")]
    Encode(String),

    #[error("payload decoding failed: {0}")]
    Decode(String),

    // Transport errors
    #[error("publish failed: {0}")]
    Publish(String),
}

/// Result type for Beacon operations
pub type BeaconResult<T> = Result<T, BeaconError>;
