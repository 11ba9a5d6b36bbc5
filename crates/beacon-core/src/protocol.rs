//! Protocol constants

/// Source identifier attached to every published message
///
/// Receivers use it to distinguish emitter-originated messages from
/// server-originated ones; it never varies per instance.
pub const SENDER_UID: &str = "emitter";

/// Packet-type marker for application event packets
pub const EVENT_PACKET: u8 = 2;

/// Event names receivers treat as connection-lifecycle signals
///
/// Broadcasting any of these would be interpreted as an internal lifecycle
/// event on the receiving side, so they are rejected before publish.
pub const RESERVED_EVENTS: &[&str] = &[
    "connect",
    "connect_error",
    "disconnect",
    "disconnecting",
    "newListener",
    "removeListener",
];

/// Is `name` reserved for connection-lifecycle use?
pub fn is_reserved_event(name: &str) -> bool {
    RESERVED_EVENTS.contains(&name)
}
