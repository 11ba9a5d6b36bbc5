//! Beacon Emitter - Producer side of the fan-out broadcast protocol
//!
//! This crate lets a process without any client connection inject events
//! and control commands into a cluster of message-routing servers:
//! - [`Dispatcher`] - entry point bound to one namespace and one pub/sub
//!   destination
//! - [`BroadcastOperator`] - immutable room/exclusion/flag targeting with
//!   the terminal publish actions
//! - [`PublishTransport`] - the seam to the actual pub/sub client
//! - [`MemoryTransport`] - in-process transport for tests
//!
//! Every server subscribed to the destination decides locally whether a
//! published message applies to its connections; the emitter itself holds
//! no state beyond its configuration.

pub mod broadcast;
pub mod dispatcher;
pub mod memory;
pub mod transport;

pub use broadcast::*;
pub use dispatcher::*;
pub use memory::*;
pub use transport::*;

pub use beacon_core::{BeaconError, BeaconResult, MessageKind, Namespace, Rooms};
pub use beacon_wire::{BroadcastFlags, BroadcastOptions, Value, WireMessage};
