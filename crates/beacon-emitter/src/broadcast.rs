//! Immutable broadcast targeting
//!
//! A `BroadcastOperator` accumulates rooms, exclusions, and delivery flags
//! across chained selector calls, then snapshots them into a wire message
//! when a terminal action fires. Selectors never mutate the receiver, so a
//! single operator (or the dispatcher behind it) can be reused from any
//! number of tasks without synchronization.

use std::collections::BTreeSet;
use std::sync::Arc;

use beacon_core::{is_reserved_event, BeaconError, BeaconResult, Namespace, Rooms};
use beacon_wire::{BroadcastFlags, BroadcastOptions, Value, WireMessage};

use crate::{FailureMode, PublishTransport};

/// Immutable accumulator of room/exclusion/flag targeting
#[derive(Clone)]
pub struct BroadcastOperator {
    transport: Arc<dyn PublishTransport>,
    destination: Arc<str>,
    nsp: Namespace,
    rooms: BTreeSet<String>,
    except: BTreeSet<String>,
    flags: BroadcastFlags,
    failure_mode: FailureMode,
}

impl BroadcastOperator {
    pub(crate) fn new(
        transport: Arc<dyn PublishTransport>,
        destination: Arc<str>,
        nsp: Namespace,
        failure_mode: FailureMode,
    ) -> Self {
        BroadcastOperator {
            transport,
            destination,
            nsp,
            rooms: BTreeSet::new(),
            except: BTreeSet::new(),
            flags: BroadcastFlags::NONE,
            failure_mode,
        }
    }

    /// Target the given room(s); chained calls accumulate
    pub fn to(&self, rooms: impl Into<Rooms>) -> Self {
        let mut next = self.clone();
        next.rooms.extend(rooms.into().into_vec());
        next
    }

    /// Exclude the given room(s) or connection identifier(s)
    ///
    /// The exclusion set is independent of the room set; excluding a room
    /// that is also targeted is legal and left to the receiving side
    /// (exclusion wins there).
    pub fn except(&self, rooms: impl Into<Rooms>) -> Self {
        let mut next = self.clone();
        next.except.extend(rooms.into().into_vec());
        next
    }

    /// Let receivers drop the message when a target connection cannot
    /// receive it immediately
    pub fn volatile(&self) -> Self {
        let mut next = self.clone();
        next.flags.set_volatile(true);
        next
    }

    /// Ask receivers to compress payload bytes
    pub fn compress(&self, compress: bool) -> Self {
        let mut next = self.clone();
        next.flags.set_compress(compress);
        next
    }

    #[inline]
    pub fn namespace(&self) -> &Namespace {
        &self.nsp
    }

    #[inline]
    pub fn room_set(&self) -> &BTreeSet<String> {
        &self.rooms
    }

    #[inline]
    pub fn except_set(&self) -> &BTreeSet<String> {
        &self.except
    }

    #[inline]
    pub fn flags(&self) -> BroadcastFlags {
        self.flags
    }

    /// Broadcast an event to every matching connection
    ///
    /// Fails with [`BeaconError::ReservedEvent`] before any transport
    /// activity if `event` is a connection-lifecycle name.
    pub async fn emit(&self, event: &str, args: Vec<Value>) -> BeaconResult<()> {
        if is_reserved_event(event) {
            return Err(BeaconError::ReservedEvent(event.to_string()));
        }
        let message = WireMessage::broadcast(&self.nsp, event, args, &self.snapshot())?;
        self.publish(message).await
    }

    /// Make matching connections join the given room(s)
    pub async fn sockets_join(&self, rooms: impl Into<Rooms>) -> BeaconResult<()> {
        let message =
            WireMessage::sockets_join(&self.nsp, rooms.into().into_vec(), &self.snapshot())?;
        self.publish(message).await
    }

    /// Make matching connections leave the given room(s)
    pub async fn sockets_leave(&self, rooms: impl Into<Rooms>) -> BeaconResult<()> {
        let message =
            WireMessage::sockets_leave(&self.nsp, rooms.into().into_vec(), &self.snapshot())?;
        self.publish(message).await
    }

    /// Disconnect matching connections; `close` also closes the underlying
    /// transport connection
    pub async fn disconnect_sockets(&self, close: bool) -> BeaconResult<()> {
        let message = WireMessage::disconnect_sockets(&self.nsp, close, &self.snapshot())?;
        self.publish(message).await
    }

    /// Targeting state captured at the moment a terminal action fires
    fn snapshot(&self) -> BroadcastOptions {
        BroadcastOptions {
            rooms: self.rooms.iter().cloned().collect(),
            except: self.except.iter().cloned().collect(),
            flags: self.flags,
        }
    }

    /// Single publish chokepoint; applies the configured failure mode
    pub(crate) async fn publish(&self, message: WireMessage) -> BeaconResult<()> {
        let kind = message.kind_attribute();
        tracing::debug!(
            kind,
            nsp = %message.nsp,
            destination = %self.destination,
            bytes = message.data.len(),
            "publishing"
        );
        match self
            .transport
            .publish(&self.destination, kind, message.attributes())
            .await
        {
            Ok(()) => Ok(()),
            Err(err) => match self.failure_mode {
                FailureMode::LogAndContinue => {
                    tracing::warn!(%err, kind, destination = %self.destination, "publish failed");
                    Ok(())
                }
                FailureMode::Propagate => Err(err),
            },
        }
    }
}
