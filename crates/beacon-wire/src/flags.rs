//! Delivery flags
//!
//! Flags are hints to the receiving side: `volatile` lets a receiver drop
//! the message when the target connection cannot receive immediately,
//! `compress` lets it compress payload bytes. Both are optional; chained
//! writes merge last-write-wins per key.

use rmpv::Value;

/// Optional delivery hints carried in the targeting snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BroadcastFlags {
    volatile: bool,
    compress: Option<bool>,
}

impl BroadcastFlags {
    pub const NONE: BroadcastFlags = BroadcastFlags {
        volatile: false,
        compress: None,
    };

    #[inline]
    pub fn is_volatile(self) -> bool {
        self.volatile
    }

    #[inline]
    pub fn compress(self) -> Option<bool> {
        self.compress
    }

    #[inline]
    pub fn set_volatile(&mut self, value: bool) {
        self.volatile = value;
    }

    #[inline]
    pub fn set_compress(&mut self, value: bool) {
        self.compress = Some(value);
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !self.volatile && self.compress.is_none()
    }

    /// Wire form: a map holding only the keys that were set
    pub fn to_value(self) -> Value {
        let mut entries = Vec::new();
        if self.volatile {
            entries.push((Value::from("volatile"), Value::from(true)));
        }
        if let Some(compress) = self.compress {
            entries.push((Value::from("compress"), Value::from(compress)));
        }
        Value::Map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_operations() {
        let mut flags = BroadcastFlags::NONE;
        assert!(flags.is_empty());

        flags.set_volatile(true);
        assert!(flags.is_volatile());
        assert_eq!(flags.compress(), None);

        flags.set_compress(true);
        assert_eq!(flags.compress(), Some(true));
        assert!(!flags.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut flags = BroadcastFlags::NONE;
        flags.set_compress(true);
        flags.set_compress(false);
        assert_eq!(flags.compress(), Some(false));
    }

    #[test]
    fn test_wire_form_holds_only_set_keys() {
        assert_eq!(BroadcastFlags::NONE.to_value(), Value::Map(vec![]));

        let mut flags = BroadcastFlags::NONE;
        flags.set_volatile(true);
        assert_eq!(
            flags.to_value(),
            Value::Map(vec![(Value::from("volatile"), Value::from(true))])
        );

        flags.set_compress(false);
        assert_eq!(
            flags.to_value(),
            Value::Map(vec![
                (Value::from("volatile"), Value::from(true)),
                (Value::from("compress"), Value::from(false)),
            ])
        );
    }
}
