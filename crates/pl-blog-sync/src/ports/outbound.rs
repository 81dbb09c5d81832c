//! # Outbound Ports
//!
//! Traits for the three external collaborators: the post store, the channel
//! gateway, and the packet codec. All calls are synchronous and report
//! not-found / denied as explicit values, never as panics.

use crate::domain::{
    AckEnvelope, BlogSyncError, Packet, Post, PostId, Route, SentPost, TimedoutPost,
    UpdatePostAck, UpdatePostData,
};

/// Durable post storage - outbound port.
///
/// Keyed storage with a monotonic id counter per collection. The timed-out
/// log is append-only.
pub trait PostStore: Send + Sync {
    /// Look up a post by id.
    fn post(&self, id: PostId) -> Option<Post>;

    /// Persist a post under its id.
    fn set_post(&self, post: Post);

    /// Create a post, assigning the next id.
    fn append_post(&self, title: &str, content: &str, creator: &str) -> PostId;

    /// Number of posts created so far.
    fn post_count(&self) -> u64;

    /// Look up a sent-post shadow by target id.
    fn sent_post(&self, id: PostId) -> Option<SentPost>;

    /// Persist a sent-post shadow under its id.
    fn set_sent_post(&self, post: SentPost);

    /// Record a shadow for a freshly transmitted update.
    ///
    /// Last-writer-wins: a second transmit before resolution overwrites the
    /// shadow's proposed values.
    fn append_sent_post(&self, post: SentPost);

    /// Append a compensation entry. Unconditional.
    fn append_timedout_post(&self, post: TimedoutPost);

    /// Snapshot of the compensation log, in append order.
    fn timedout_posts(&self) -> Vec<TimedoutPost>;
}

/// Ordered channel gateway - outbound port.
///
/// Resolves local endpoints to their remote counterparties, allocates send
/// sequences, enforces send capabilities, and delivers packets in order with
/// at-most-once semantics.
pub trait ChannelGateway: Send + Sync {
    /// Resolve a local endpoint to its remote counterparty.
    fn resolve_route(&self, source: &Route) -> Option<Route>;

    /// Next unused send sequence for the route, if the route is open.
    fn next_send_sequence(&self, source: &Route) -> Option<u64>;

    /// Whether the calling module holds the channel's send capability.
    fn check_send_capability(&self, source: &Route) -> bool;

    /// Hand a fully formed packet to the channel for ordered delivery.
    fn send_packet(&self, packet: Packet) -> Result<(), BlogSyncError>;
}

/// Wire codec - outbound port.
///
/// Serializes messages and acknowledgements to the wire encoding and
/// validates structural well-formedness on decode.
pub trait PacketCodec: Send + Sync {
    /// Encode an update message.
    fn encode_update(&self, data: &UpdatePostData) -> Result<Vec<u8>, BlogSyncError>;

    /// Decode an update message.
    fn decode_update(&self, bytes: &[u8]) -> Result<UpdatePostData, BlogSyncError>;

    /// Encode an application acknowledgement.
    fn encode_ack(&self, ack: &UpdatePostAck) -> Result<Vec<u8>, BlogSyncError>;

    /// Decode an application acknowledgement.
    fn decode_ack(&self, bytes: &[u8]) -> Result<UpdatePostAck, BlogSyncError>;

    /// Encode a transport acknowledgement envelope.
    fn encode_ack_envelope(&self, envelope: &AckEnvelope) -> Result<Vec<u8>, BlogSyncError>;

    /// Decode a transport acknowledgement envelope.
    ///
    /// An envelope matching neither the error nor the result shape is
    /// rejected.
    fn decode_ack_envelope(&self, bytes: &[u8]) -> Result<AckEnvelope, BlogSyncError>;
}
