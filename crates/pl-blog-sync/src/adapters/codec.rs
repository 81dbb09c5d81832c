//! JSON Packet Codec Adapter
//!
//! Implements the `PacketCodec` port over serde_json. JSON is the module's
//! wire encoding for both update messages and acknowledgements.

use crate::domain::{AckEnvelope, BlogSyncError, UpdatePostAck, UpdatePostData};
use crate::ports::outbound::PacketCodec;

/// JSON wire codec.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonPacketCodec;

impl JsonPacketCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl PacketCodec for JsonPacketCodec {
    fn encode_update(&self, data: &UpdatePostData) -> Result<Vec<u8>, BlogSyncError> {
        serde_json::to_vec(data).map_err(|e| BlogSyncError::EncodingError(e.to_string()))
    }

    fn decode_update(&self, bytes: &[u8]) -> Result<UpdatePostData, BlogSyncError> {
        serde_json::from_slice(bytes)
            .map_err(|e| BlogSyncError::ValidationFailed(format!("malformed update packet: {e}")))
    }

    fn encode_ack(&self, ack: &UpdatePostAck) -> Result<Vec<u8>, BlogSyncError> {
        serde_json::to_vec(ack).map_err(|e| BlogSyncError::EncodingError(e.to_string()))
    }

    fn decode_ack(&self, bytes: &[u8]) -> Result<UpdatePostAck, BlogSyncError> {
        // The counterparty module owns this payload; any schema mismatch is
        // its protocol violation, not a local encoding bug.
        serde_json::from_slice(bytes).map_err(|_| BlogSyncError::MalformedAck)
    }

    fn encode_ack_envelope(&self, envelope: &AckEnvelope) -> Result<Vec<u8>, BlogSyncError> {
        serde_json::to_vec(envelope).map_err(|e| BlogSyncError::EncodingError(e.to_string()))
    }

    fn decode_ack_envelope(&self, bytes: &[u8]) -> Result<AckEnvelope, BlogSyncError> {
        serde_json::from_slice(bytes).map_err(|_| BlogSyncError::InvalidAckFormat)
    }
}
