//! # Domain Entities
//!
//! Core entities for cross-domain blog synchronization: the canonical post,
//! the sender-side shadow awaiting remote confirmation, the append-only
//! compensation log entry, and the wire-crossing message types.

use super::value_objects::{AckStatus, DeliveryDeadline, PostId, Route};
use serde::{Deserialize, Serialize};

/// Canonical post, owned by the receiving domain.
///
/// Mutated in place by a valid inbound update; never deleted by this core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, assigned by the store on creation.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author identity. Never altered by an update.
    pub creator: String,
}

/// Sender-side shadow of a post with an unresolved outbound update.
///
/// Written before the packet is handed to the channel; the proposed title is
/// committed only on a success acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentPost {
    /// Target post id in the sender's numeric space.
    pub id: PostId,
    /// Proposed title awaiting confirmation.
    pub title: String,
    /// Author identity.
    pub creator: String,
}

impl SentPost {
    /// Create a new shadow entry.
    pub fn new(id: PostId, title: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            creator: creator.into(),
        }
    }
}

/// Compensation entry for an update whose delivery window expired.
///
/// Append-only; never mutated or deleted by this core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedoutPost {
    /// Author identity from the original message.
    pub creator: String,
    /// Proposed title from the original message.
    pub title: String,
    /// Composite route identifier: destination port + "-" + destination channel.
    pub chain: String,
}

/// Update message carried by a packet.
///
/// The post id stays text on the wire; [`PostId::parse`] converts it to a
/// typed handle on use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostData {
    /// Target post id, numeric-as-text.
    pub post_id: String,
    /// Proposed title.
    pub title: String,
    /// Proposed body.
    pub content: String,
    /// Author identity.
    pub creator: String,
}

impl UpdatePostData {
    /// Create a new update message.
    pub fn new(
        post_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            post_id: post_id.into(),
            title: title.into(),
            content: content.into(),
            creator: creator.into(),
        }
    }
}

/// Application-level acknowledgement produced by the receiver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostAck {
    /// Verdict for the applied update.
    pub status: AckStatus,
}

impl UpdatePostAck {
    /// Acknowledgement for an applied update.
    pub fn success() -> Self {
        Self {
            status: AckStatus::Success,
        }
    }

    /// Acknowledgement for a rejected update.
    pub fn failed() -> Self {
        Self {
            status: AckStatus::Failed,
        }
    }
}

/// Transport envelope wrapping an acknowledgement.
///
/// Exactly two shapes exist: a transport-level rejection carrying an opaque
/// error string, or a result carrying the encoded application
/// acknowledgement. The codec rejects anything else on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AckEnvelope {
    /// Transport-level rejection (malformed packet, channel closure).
    #[serde(rename = "error")]
    Error(String),
    /// Encoded application acknowledgement.
    #[serde(rename = "result")]
    Result(Vec<u8>),
}

/// One ordered, sequence-numbered unit of transmission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Encoded message payload.
    pub data: Vec<u8>,
    /// Send sequence number, allocated per route.
    pub sequence: u64,
    /// Local endpoint the packet was sent from.
    pub source: Route,
    /// Remote counterparty endpoint.
    pub destination: Route,
    /// Delivery deadline.
    pub deadline: DeliveryDeadline,
}

/// Policy for transport-level error envelopes.
///
/// The channel can reject a packet outright instead of relaying an
/// application acknowledgement. [`AckErrorPolicy::Ignore`] leaves the
/// sent-post shadow pending for a manual retry; [`AckErrorPolicy::Compensate`]
/// records the rejection exactly as a timeout would.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AckErrorPolicy {
    /// Surface the error in logs only; the shadow stays pending.
    #[default]
    Ignore,
    /// Append a compensation entry, mirroring the timeout path.
    Compensate,
}

/// Subsystem configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlogSyncConfig {
    /// How to reconcile a transport-level error envelope.
    pub ack_error_policy: AckErrorPolicy,
    /// Maximum title length in bytes (0 disables the bound).
    pub max_title_len: usize,
    /// Maximum content length in bytes (0 disables the bound).
    pub max_content_len: usize,
}

impl Default for BlogSyncConfig {
    fn default() -> Self {
        Self {
            ack_error_policy: AckErrorPolicy::Ignore,
            max_title_len: 128,
            max_content_len: 10_000,
        }
    }
}
