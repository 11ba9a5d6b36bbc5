//! Targeting snapshot
//!
//! The room set, exclusion set, and flags captured into a wire message at
//! the moment a terminal action fires. Sets become ordered sequences at the
//! wire boundary.

use rmpv::Value;

use crate::BroadcastFlags;

/// Room/exclusion/flags snapshot carried by every control message
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BroadcastOptions {
    /// Target rooms; empty means every connection in the namespace
    pub rooms: Vec<String>,
    /// Rooms and connection identifiers to skip
    pub except: Vec<String>,
    /// Delivery hints
    pub flags: BroadcastFlags,
}

impl BroadcastOptions {
    pub fn new() -> Self {
        BroadcastOptions::default()
    }

    /// Wire form: `{"rooms": [...], "except": [...], "flags": {...}}`
    pub fn to_value(&self) -> Value {
        Value::Map(vec![
            (Value::from("rooms"), string_seq(&self.rooms)),
            (Value::from("except"), string_seq(&self.except)),
            (Value::from("flags"), self.flags.to_value()),
        ])
    }
}

/// Render a room list as an ordered wire sequence
pub(crate) fn string_seq(items: &[String]) -> Value {
    Value::Array(items.iter().map(|s| Value::from(s.as_str())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let opts = BroadcastOptions::new();
        assert_eq!(
            opts.to_value(),
            Value::Map(vec![
                (Value::from("rooms"), Value::Array(vec![])),
                (Value::from("except"), Value::Array(vec![])),
                (Value::from("flags"), Value::Map(vec![])),
            ])
        );
    }

    #[test]
    fn test_rooms_render_as_sequences() {
        let opts = BroadcastOptions {
            rooms: vec!["a".into(), "b".into()],
            except: vec!["c".into()],
            flags: BroadcastFlags::NONE,
        };
        let value = opts.to_value();
        let map = value.as_map().unwrap();
        assert_eq!(
            map[0].1,
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(map[1].1, Value::Array(vec![Value::from("c")]));
    }
}
