//! # Domain Value Objects
//!
//! Immutable value types for cross-domain blog synchronization.

use super::errors::BlogSyncError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed post identifier.
///
/// Post ids cross the wire as text for interoperability with heterogeneous
/// encodings; [`PostId::parse`] is the single conversion point from untrusted
/// text to a trusted numeric handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Create an id from a known-good numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse an id from its wire (text) form.
    pub fn parse(raw: &str) -> Result<Self, BlogSyncError> {
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| BlogSyncError::ValidationFailed(format!("post id is not numeric: {raw:?}")))
    }

    /// Numeric value of the id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One endpoint of an ordered channel: a (port, channel) pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// Port identifier.
    pub port: String,
    /// Channel identifier.
    pub channel: String,
}

impl Route {
    /// Create a new route.
    pub fn new(port: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            channel: channel.into(),
        }
    }

    /// Composite identifier naming the domain behind this route.
    ///
    /// Used by compensation entries to record which route failed.
    pub fn chain_id(&self) -> String {
        format!("{}-{}", self.port, self.channel)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.channel)
    }
}

/// Delivery deadline for a transmitted packet.
///
/// At least one bound must be non-zero: an absolute remote-height bound, an
/// absolute wall-clock timestamp, or both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryDeadline {
    /// Remote height after which the packet times out (0 = unset).
    pub height: u64,
    /// Wall-clock timestamp in unix nanoseconds after which the packet
    /// times out (0 = unset).
    pub timestamp: u64,
}

impl DeliveryDeadline {
    /// Deadline bounded by remote height only.
    pub fn at_height(height: u64) -> Self {
        Self { height, timestamp: 0 }
    }

    /// Deadline bounded by wall-clock timestamp only.
    pub fn at_timestamp(timestamp: u64) -> Self {
        Self { height: 0, timestamp }
    }

    /// Check that at least one bound is set.
    pub fn is_set(&self) -> bool {
        self.height != 0 || self.timestamp != 0
    }
}

/// Application-level verdict carried by an acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    /// The remote domain applied the update.
    Success,
    /// The remote domain rejected the update.
    Failed,
}

/// Per-packet lifecycle, from the sender's perspective.
///
/// The three terminal states are mutually exclusive; the transport guarantees
/// exactly one terminal callback per transmitted packet, so no transition
/// back to [`DeliveryState::Sent`] exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryState {
    /// Packet built but not yet handed to the channel.
    #[default]
    Created,
    /// In flight, awaiting a verdict.
    Sent,
    /// Remote domain acknowledged success.
    AckedSuccess,
    /// Remote domain acknowledged failure.
    AckedFailure,
    /// Delivery window expired with no acknowledgement.
    TimedOut,
}

impl DeliveryState {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: DeliveryState) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::Sent)
                | (Self::Sent, Self::AckedSuccess)
                | (Self::Sent, Self::AckedFailure)
                | (Self::Sent, Self::TimedOut)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::AckedSuccess | Self::AckedFailure | Self::TimedOut)
    }
}
