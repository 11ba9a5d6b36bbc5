//! Beacon Core - Fundamental types for the broadcast emitter
//!
//! This crate defines the types shared across the Beacon stack:
//! - Namespace paths (normalized, `/`-rooted)
//! - Message discriminators shared with the receiving protocol
//! - Protocol constants (sender identity, reserved event names)
//! - Room-argument normalization
//! - Error types

pub mod error;
pub mod kind;
pub mod namespace;
pub mod protocol;
pub mod rooms;

pub use error::*;
pub use kind::*;
pub use namespace::*;
pub use protocol::*;
pub use rooms::*;
