//! Message discriminators shared with the receiving protocol
//!
//! Receivers key their behavior off these numeric values, so they are a
//! wire contract: changing one breaks interoperability with every server
//! subscribed to the destination.

/// Message type discriminator
///
/// Values 0-6 mirror the request table of the receiving servers. Several of
/// them (`Sockets`, `AllRooms`, `RemoteFetch`) belong to the
/// request/response side of the protocol and are never produced by this
/// emitter, which does not support acknowledgements. `Broadcast` is the
/// event-broadcast discriminator, distinct from the request table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageKind {
    /// Fetch matching socket instances
    Sockets = 0,
    /// Enumerate all rooms
    AllRooms = 1,
    /// Make matching connections join rooms
    RemoteJoin = 2,
    /// Make matching connections leave rooms
    RemoteLeave = 3,
    /// Disconnect matching connections
    RemoteDisconnect = 4,
    /// Fetch matching sockets with their details
    RemoteFetch = 5,
    /// Server-to-server custom event
    ServerSideEmit = 6,
    /// Application event broadcast
    Broadcast = 7,
}

impl MessageKind {
    /// Parse from wire byte
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(MessageKind::Sockets),
            1 => Some(MessageKind::AllRooms),
            2 => Some(MessageKind::RemoteJoin),
            3 => Some(MessageKind::RemoteLeave),
            4 => Some(MessageKind::RemoteDisconnect),
            5 => Some(MessageKind::RemoteFetch),
            6 => Some(MessageKind::ServerSideEmit),
            7 => Some(MessageKind::Broadcast),
            _ => None,
        }
    }

    /// Convert to wire byte
    #[inline]
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Decimal string form carried in the transport attribute map
    pub fn as_attribute(self) -> &'static str {
        match self {
            MessageKind::Sockets => "0",
            MessageKind::AllRooms => "1",
            MessageKind::RemoteJoin => "2",
            MessageKind::RemoteLeave => "3",
            MessageKind::RemoteDisconnect => "4",
            MessageKind::RemoteFetch => "5",
            MessageKind::ServerSideEmit => "6",
            MessageKind::Broadcast => "7",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MessageKind; 8] = [
        MessageKind::Sockets,
        MessageKind::AllRooms,
        MessageKind::RemoteJoin,
        MessageKind::RemoteLeave,
        MessageKind::RemoteDisconnect,
        MessageKind::RemoteFetch,
        MessageKind::ServerSideEmit,
        MessageKind::Broadcast,
    ];

    #[test]
    fn test_kind_roundtrip() {
        for kind in ALL {
            let byte = kind.to_byte();
            let recovered = MessageKind::from_byte(byte).unwrap();
            assert_eq!(kind, recovered);
        }
    }

    #[test]
    fn test_wire_values_pinned() {
        // Shared with the receiving protocol; never renumber.
        assert_eq!(MessageKind::Sockets.to_byte(), 0);
        assert_eq!(MessageKind::AllRooms.to_byte(), 1);
        assert_eq!(MessageKind::RemoteJoin.to_byte(), 2);
        assert_eq!(MessageKind::RemoteLeave.to_byte(), 3);
        assert_eq!(MessageKind::RemoteDisconnect.to_byte(), 4);
        assert_eq!(MessageKind::RemoteFetch.to_byte(), 5);
        assert_eq!(MessageKind::ServerSideEmit.to_byte(), 6);
        assert_eq!(MessageKind::Broadcast.to_byte(), 7);
    }

    #[test]
    fn test_attribute_matches_byte() {
        for kind in ALL {
            assert_eq!(kind.as_attribute(), kind.to_byte().to_string());
        }
    }

    #[test]
    fn test_unknown_byte_rejected() {
        assert_eq!(MessageKind::from_byte(8), None);
        assert_eq!(MessageKind::from_byte(0xFF), None);
    }
}
