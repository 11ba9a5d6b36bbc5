//! In-process transport
//!
//! Records every publish instead of talking to a broker. Intended for
//! tests and local experiments; the emitter's own message path stays
//! lock-free, only the record log is behind a mutex.

use async_trait::async_trait;
use parking_lot::Mutex;

use beacon_core::{BeaconError, BeaconResult};
use beacon_wire::MessageAttributes;

use crate::PublishTransport;

/// Record of one issued publish
#[derive(Clone, Debug)]
pub struct PublishedMessage {
    pub destination: String,
    pub kind: String,
    pub attributes: MessageAttributes,
}

/// Transport that appends every publish to an in-memory log
#[derive(Default)]
pub struct MemoryTransport {
    published: Mutex<Vec<PublishedMessage>>,
    fail_with: Mutex<Option<String>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        MemoryTransport::default()
    }

    /// Snapshot of everything published so far
    pub fn published(&self) -> Vec<PublishedMessage> {
        self.published.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.published.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.published.lock().is_empty()
    }

    /// Make every subsequent publish fail with `reason`
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.fail_with.lock() = Some(reason.into());
    }
}

#[async_trait]
impl PublishTransport for MemoryTransport {
    async fn publish(
        &self,
        destination: &str,
        kind: &str,
        attributes: MessageAttributes,
    ) -> BeaconResult<()> {
        if let Some(reason) = self.fail_with.lock().clone() {
            return Err(BeaconError::Publish(reason));
        }
        self.published.lock().push(PublishedMessage {
            destination: destination.to_string(),
            kind: kind.to_string(),
            attributes,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_publishes() {
        let transport = MemoryTransport::new();
        assert!(transport.is_empty());

        let attributes = MessageAttributes {
            nsp: "/".to_string(),
            uid: "emitter",
            data: bytes::Bytes::from_static(b"\x90"),
        };
        transport.publish("beacon", "7", attributes).await.unwrap();

        let published = transport.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].destination, "beacon");
        assert_eq!(published[0].kind, "7");
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let transport = MemoryTransport::new();
        transport.fail_with("broker down");

        let attributes = MessageAttributes {
            nsp: "/".to_string(),
            uid: "emitter",
            data: bytes::Bytes::new(),
        };
        let err = transport
            .publish("beacon", "7", attributes)
            .await
            .unwrap_err();
        assert!(matches!(err, BeaconError::Publish(_)));
        assert!(transport.is_empty());
    }
}
