//! Beacon Wire - Message assembly and payload encoding
//!
//! This crate builds the unit handed to the transport:
//! - Delivery flags and the targeting snapshot
//! - Wire message construction, one constructor per action
//! - The MessagePack codec boundary

pub mod flags;
pub mod message;
pub mod options;

pub use flags::*;
pub use message::*;
pub use options::*;

/// Structured payload value (MessagePack data model)
pub use rmpv::Value;
