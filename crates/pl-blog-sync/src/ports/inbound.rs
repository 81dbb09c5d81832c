//! # Inbound Ports
//!
//! API trait defining what the blog synchronization subsystem can do. The
//! transport layer is the sole caller of the three `on_*` callbacks and
//! invokes exactly one terminal callback per transmitted packet.

use crate::domain::{
    AckEnvelope, BlogSyncError, DeliveryDeadline, Packet, Route, UpdatePostAck, UpdatePostData,
};

/// Outcome of applying an inbound update.
///
/// Both arms carry the acknowledgement the transport must return to the
/// sender; `Rejected` additionally surfaces the reason the update was not
/// applied. Structural validation failures produce no acknowledgement at all
/// and are reported as a plain error instead.
#[derive(Debug)]
pub enum RecvOutcome {
    /// The update was applied; acknowledgement status is success.
    Applied(UpdatePostAck),
    /// The update was rejected; acknowledgement status is failed.
    Rejected {
        /// Failure acknowledgement to relay to the sender.
        ack: UpdatePostAck,
        /// Why the update was not applied.
        reason: BlogSyncError,
    },
}

impl RecvOutcome {
    /// The acknowledgement to hand back to the transport.
    pub fn ack(&self) -> &UpdatePostAck {
        match self {
            Self::Applied(ack) => ack,
            Self::Rejected { ack, .. } => ack,
        }
    }

    /// Whether the update mutated the store.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Blog synchronization API - inbound port.
pub trait BlogSyncApi: Send + Sync {
    /// Record the sent-post shadow and transmit the update.
    ///
    /// The shadow write happens before the send so an immediately-arriving
    /// acknowledgement never races an absent shadow. A repeated send for the
    /// same post overwrites the shadow's proposed values.
    fn send_update(
        &self,
        data: UpdatePostData,
        source: Route,
        deadline: DeliveryDeadline,
    ) -> Result<Packet, BlogSyncError>;

    /// Build and dispatch an update packet over the given source route.
    ///
    /// Performs the route, sequence, and capability checks and hands the
    /// encoded packet to the channel. Mutates no store state.
    fn transmit_update(
        &self,
        data: &UpdatePostData,
        source: &Route,
        deadline: DeliveryDeadline,
    ) -> Result<Packet, BlogSyncError>;

    /// Apply an inbound update and produce the acknowledgement.
    ///
    /// A validation failure returns `Err` and produces no acknowledgement; a
    /// missing target post returns [`RecvOutcome::Rejected`] with a failure
    /// acknowledgement.
    fn on_recv_update(
        &self,
        packet: &Packet,
        data: &UpdatePostData,
    ) -> Result<RecvOutcome, BlogSyncError>;

    /// Reconcile sender-side state from a delivered acknowledgement envelope.
    fn on_ack_update(
        &self,
        packet: &Packet,
        data: &UpdatePostData,
        envelope: AckEnvelope,
    ) -> Result<(), BlogSyncError>;

    /// Record compensation for a packet whose delivery window expired.
    fn on_timeout_update(
        &self,
        packet: &Packet,
        data: &UpdatePostData,
    ) -> Result<(), BlogSyncError>;
}
