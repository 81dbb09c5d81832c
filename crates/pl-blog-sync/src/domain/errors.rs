//! # Domain Errors
//!
//! Error types for the packet lifecycle. Every failure is terminal for the
//! call that produced it; retries are a fresh send cycle initiated by the
//! caller.

use thiserror::Error;

/// Packet lifecycle error types.
#[derive(Debug, Error)]
pub enum BlogSyncError {
    /// Local channel endpoint is unknown.
    #[error("route not found: port ({port}) channel ({channel})")]
    RouteNotFound {
        /// Source port.
        port: String,
        /// Source channel.
        channel: String,
    },

    /// No send sequence available (route closing or closed).
    #[error("send sequence not found: port ({port}) channel ({channel})")]
    SequenceExhausted {
        /// Source port.
        port: String,
        /// Source channel.
        channel: String,
    },

    /// Caller does not hold the channel's send capability.
    #[error("module does not own channel capability")]
    CapabilityDenied,

    /// Neither deadline bound is set.
    #[error("packet deadline is not set")]
    InvalidDeadline,

    /// Payload could not be serialized.
    #[error("cannot marshal the packet: {0}")]
    EncodingError(String),

    /// Inbound message failed structural validation.
    #[error("invalid update: {0}")]
    ValidationFailed(String),

    /// Target post does not exist on the receiving side.
    #[error("post not found: {0}")]
    PostNotFound(u64),

    /// Acknowledgement payload violated the acknowledgement schema.
    #[error("cannot unmarshal acknowledgment")]
    MalformedAck,

    /// No sent-post shadow matches the acknowledged packet.
    #[error("sent post not found: {0}")]
    SentPostNotFound(u64),

    /// The remote domain explicitly rejected the update.
    #[error("failed to update post")]
    RemoteUpdateRejected,

    /// Acknowledgement envelope matched neither known shape.
    #[error("invalid acknowledgment format")]
    InvalidAckFormat,

    /// A second terminal verdict arrived for an already-resolved packet.
    #[error("duplicate delivery verdict for sequence {0}")]
    DuplicateVerdict(u64),

    /// Channel refused the packet.
    #[error("send failed: {0}")]
    SendFailed(String),
}
