//! Namespace-scoped dispatcher
//!
//! The entry point of the emitter: bound to one transport handle, one
//! destination, and one namespace path. Dispatchers are cheap values
//! created per call site and hold no connection state; every targeting
//! call delegates to a fresh [`BroadcastOperator`].

use std::fmt;
use std::sync::Arc;

use beacon_core::{BeaconError, BeaconResult, Namespace, Rooms};
use beacon_wire::{Value, WireMessage};

use crate::{BroadcastOperator, FailureMode, PublishTransport};

/// Argument list for a cross-server emit
///
/// The protocol has no acknowledgement channel, so a call shaped to expect
/// a reply is rejected before any transport activity.
#[derive(Clone, Debug)]
pub enum ServerEmitCall {
    /// Fire-and-forget arguments
    Args(Vec<Value>),
    /// Arguments expecting an acknowledgement reply; always rejected
    WithAck(Vec<Value>),
}

impl From<Vec<Value>> for ServerEmitCall {
    fn from(args: Vec<Value>) -> Self {
        ServerEmitCall::Args(args)
    }
}

/// Entry point bound to one namespace and one transport destination
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn PublishTransport>,
    destination: Arc<str>,
    nsp: Namespace,
    failure_mode: FailureMode,
}

impl Dispatcher {
    /// Create a dispatcher on the root namespace
    pub fn new(transport: Arc<dyn PublishTransport>, destination: impl Into<String>) -> Self {
        let destination: String = destination.into();
        Dispatcher {
            transport,
            destination: Arc::from(destination),
            nsp: Namespace::root(),
            failure_mode: FailureMode::default(),
        }
    }

    /// Set the publish-failure policy
    pub fn failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// A dispatcher scoped to `nsp`, sharing transport and destination
    ///
    /// The path is normalized to start with the separator; the receiver is
    /// left untouched.
    pub fn of(&self, nsp: impl Into<Namespace>) -> Self {
        Dispatcher {
            transport: Arc::clone(&self.transport),
            destination: Arc::clone(&self.destination),
            nsp: nsp.into(),
            failure_mode: self.failure_mode,
        }
    }

    #[inline]
    pub fn namespace(&self) -> &Namespace {
        &self.nsp
    }

    #[inline]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Fresh unscoped operator carrying this dispatcher's namespace
    fn operator(&self) -> BroadcastOperator {
        BroadcastOperator::new(
            Arc::clone(&self.transport),
            Arc::clone(&self.destination),
            self.nsp.clone(),
            self.failure_mode,
        )
    }

    /// Target the given room(s)
    pub fn to(&self, rooms: impl Into<Rooms>) -> BroadcastOperator {
        self.operator().to(rooms)
    }

    /// Exclude the given room(s) or connection identifier(s)
    pub fn except(&self, rooms: impl Into<Rooms>) -> BroadcastOperator {
        self.operator().except(rooms)
    }

    /// Let receivers drop the message when a target connection cannot
    /// receive it immediately
    pub fn volatile(&self) -> BroadcastOperator {
        self.operator().volatile()
    }

    /// Ask receivers to compress payload bytes
    pub fn compress(&self, compress: bool) -> BroadcastOperator {
        self.operator().compress(compress)
    }

    /// Broadcast an event to every connection in the namespace
    pub async fn emit(&self, event: &str, args: Vec<Value>) -> BeaconResult<()> {
        self.operator().emit(event, args).await
    }

    /// Make every connection in the namespace join the given room(s)
    pub async fn sockets_join(&self, rooms: impl Into<Rooms>) -> BeaconResult<()> {
        self.operator().sockets_join(rooms).await
    }

    /// Make every connection in the namespace leave the given room(s)
    pub async fn sockets_leave(&self, rooms: impl Into<Rooms>) -> BeaconResult<()> {
        self.operator().sockets_leave(rooms).await
    }

    /// Disconnect every connection in the namespace
    pub async fn disconnect_sockets(&self, close: bool) -> BeaconResult<()> {
        self.operator().disconnect_sockets(close).await
    }

    /// Send a custom event to the other servers of the cluster
    ///
    /// Fails with [`BeaconError::AckUnsupported`] before any transport
    /// activity when the call expects an acknowledgement.
    pub async fn server_side_emit(&self, call: impl Into<ServerEmitCall>) -> BeaconResult<()> {
        match call.into() {
            ServerEmitCall::WithAck(_) => Err(BeaconError::AckUnsupported),
            ServerEmitCall::Args(args) => {
                let message = WireMessage::server_side_emit(&self.nsp, args)?;
                self.operator().publish(message).await
            }
        }
    }
}

impl PartialEq for Dispatcher {
    /// Equivalence is namespace + destination; the transport handle is
    /// deliberately excluded
    fn eq(&self, other: &Self) -> bool {
        self.nsp == other.nsp && self.destination == other.destination
    }
}

impl Eq for Dispatcher {}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dispatcher({} @ {})", self.nsp, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTransport;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(MemoryTransport::new()), "beacon")
    }

    #[test]
    fn test_defaults_to_root_namespace() {
        let root = dispatcher();
        assert!(root.namespace().is_root());
        assert_eq!(root.destination(), "beacon");
    }

    #[test]
    fn test_of_normalizes_and_does_not_mutate() {
        let root = dispatcher();
        let bare = root.of("custom");
        let slashed = root.of("/custom");

        assert_eq!(bare.namespace().as_str(), "/custom");
        assert_eq!(bare, slashed);
        assert!(root.namespace().is_root());

        let other = root.of("other");
        assert_eq!(bare.namespace().as_str(), "/custom");
        assert_eq!(other.namespace().as_str(), "/other");
    }

    #[test]
    fn test_equality_ignores_transport() {
        let a = Dispatcher::new(Arc::new(MemoryTransport::new()), "beacon");
        let b = Dispatcher::new(Arc::new(MemoryTransport::new()), "beacon");
        assert_eq!(a, b);
        assert_ne!(a.of("chat"), b);
        assert_ne!(a, Dispatcher::new(Arc::new(MemoryTransport::new()), "other"));
    }

    #[test]
    fn test_server_emit_call_from_args() {
        let call: ServerEmitCall = vec![Value::from("x")].into();
        assert!(matches!(call, ServerEmitCall::Args(_)));
    }
}
