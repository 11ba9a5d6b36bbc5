//! Wire messages
//!
//! A wire message is the unit published to the shared destination: a
//! numeric discriminator, the target namespace, and a MessagePack-encoded
//! payload. The discriminator travels as a string attribute next to the
//! payload bytes, per the receiving protocol's convention.

use bytes::Bytes;
use rmpv::Value;
use serde::Serialize;

use beacon_core::{
    BeaconError, BeaconResult, MessageKind, Namespace, EVENT_PACKET, SENDER_UID,
};

use crate::options::string_seq;
use crate::BroadcastOptions;

/// Attribute map handed to the transport alongside the discriminator
#[derive(Clone, Debug)]
pub struct MessageAttributes {
    /// Target namespace path
    pub nsp: String,
    /// Constant source identifier
    pub uid: &'static str,
    /// MessagePack-encoded payload
    pub data: Bytes,
}

/// A message ready to publish
#[derive(Clone, Debug)]
pub struct WireMessage {
    /// Message type discriminator
    pub kind: MessageKind,
    /// Target namespace
    pub nsp: Namespace,
    /// Encoded payload
    pub data: Bytes,
}

impl WireMessage {
    /// Event broadcast: `[packet, options]`, the packet carrying the event
    /// name and positional arguments as one ordered sequence
    pub fn broadcast(
        nsp: &Namespace,
        event: &str,
        args: Vec<Value>,
        opts: &BroadcastOptions,
    ) -> BeaconResult<Self> {
        let mut data = Vec::with_capacity(args.len() + 1);
        data.push(Value::from(event));
        data.extend(args);

        let packet = Value::Map(vec![
            (Value::from("type"), Value::from(EVENT_PACKET)),
            (Value::from("data"), Value::Array(data)),
            (Value::from("nsp"), Value::from(nsp.as_str())),
        ]);
        let payload = Value::Array(vec![packet, opts.to_value()]);
        WireMessage::encode(MessageKind::Broadcast, nsp, &payload)
    }

    /// Make matching connections join `rooms`
    pub fn sockets_join(
        nsp: &Namespace,
        rooms: Vec<String>,
        opts: &BroadcastOptions,
    ) -> BeaconResult<Self> {
        WireMessage::encode(MessageKind::RemoteJoin, nsp, &room_change(rooms, opts))
    }

    /// Make matching connections leave `rooms`
    pub fn sockets_leave(
        nsp: &Namespace,
        rooms: Vec<String>,
        opts: &BroadcastOptions,
    ) -> BeaconResult<Self> {
        WireMessage::encode(MessageKind::RemoteLeave, nsp, &room_change(rooms, opts))
    }

    /// Disconnect matching connections; `close` also closes the underlying
    /// transport connection
    pub fn disconnect_sockets(
        nsp: &Namespace,
        close: bool,
        opts: &BroadcastOptions,
    ) -> BeaconResult<Self> {
        let payload = Value::Map(vec![
            (Value::from("close"), Value::from(close)),
            (Value::from("opts"), opts.to_value()),
        ]);
        WireMessage::encode(MessageKind::RemoteDisconnect, nsp, &payload)
    }

    /// Server-to-server custom event; the payload is the raw argument list
    pub fn server_side_emit(nsp: &Namespace, args: Vec<Value>) -> BeaconResult<Self> {
        let payload = Value::Array(args);
        WireMessage::encode(MessageKind::ServerSideEmit, nsp, &payload)
    }

    fn encode(kind: MessageKind, nsp: &Namespace, payload: &Value) -> BeaconResult<Self> {
        Ok(WireMessage {
            kind,
            nsp: nsp.clone(),
            data: encode_payload(payload)?,
        })
    }

    /// Discriminator in transport-attribute form
    #[inline]
    pub fn kind_attribute(&self) -> &'static str {
        self.kind.as_attribute()
    }

    /// Attribute map for the transport-publish call
    pub fn attributes(&self) -> MessageAttributes {
        MessageAttributes {
            nsp: self.nsp.as_str().to_string(),
            uid: SENDER_UID,
            data: self.data.clone(),
        }
    }
}

fn room_change(rooms: Vec<String>, opts: &BroadcastOptions) -> Value {
    Value::Map(vec![
        (Value::from("rooms"), string_seq(&rooms)),
        (Value::from("opts"), opts.to_value()),
    ])
}

/// Encode a structured value into payload bytes
pub fn encode_payload(value: &Value) -> BeaconResult<Bytes> {
    let mut buf = Vec::new();
    rmpv::encode::write_value(&mut buf, value)
        .map_err(|e| BeaconError::Encode(e.to_string()))?;
    Ok(Bytes::from(buf))
}

/// Decode payload bytes back into a structured value
pub fn decode_payload(data: &[u8]) -> BeaconResult<Value> {
    let mut cursor = data;
    rmpv::decode::read_value(&mut cursor).map_err(|e| BeaconError::Decode(e.to_string()))
}

/// Resolve a value's own serialize representation into a structured value
///
/// The codec resolves nested containers and custom `Serialize`
/// implementations recursively; callers never pre-flatten.
pub fn to_value(value: impl Serialize) -> BeaconResult<Value> {
    rmpv::ext::to_value(value).map_err(|e| BeaconError::Encode(e.to_string()))
}
