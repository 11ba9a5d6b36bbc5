//! Transport-publish seam

use async_trait::async_trait;

use beacon_core::BeaconResult;
use beacon_wire::MessageAttributes;

/// Publish primitive connecting the emitter to the pub/sub destination
///
/// Implementations wrap an actual pub/sub client. Publishing takes `&self`
/// so one shared handle can issue concurrent publishes from any number of
/// tasks. A resolved call means the publish was issued, not that any
/// subscriber received it.
#[async_trait]
pub trait PublishTransport: Send + Sync {
    /// Publish one message to `destination`
    ///
    /// `kind` is the numeric message discriminator in string form;
    /// `attributes` carries the namespace, source identifier, and encoded
    /// payload. Failures surface as [`BeaconError::Publish`].
    ///
    /// [`BeaconError::Publish`]: beacon_core::BeaconError::Publish
    async fn publish(
        &self,
        destination: &str,
        kind: &str,
        attributes: MessageAttributes,
    ) -> BeaconResult<()>;
}

/// Policy for transport failures at the publish boundary
///
/// Reserved-name and acknowledgement-rejection errors fail fast regardless
/// of this mode; it only governs errors reported by the transport itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Log a diagnostic and resolve the caller's await successfully
    #[default]
    LogAndContinue,
    /// Surface the failure to the caller's awaited result
    Propagate,
}
