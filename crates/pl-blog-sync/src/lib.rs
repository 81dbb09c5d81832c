//! # Planet-Link Blog Synchronization
//!
//! Packet lifecycle coordinator for cross-domain blog replication.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Propagate post updates to a remote domain over an ordered,
//! acknowledgement-based channel and reconcile local state from the delayed
//! verdict:
//! - transmit with route, sequence, and capability checks
//! - receive/apply with a deterministic success or failure acknowledgement
//! - sender-side reconciliation of the sent-post shadow
//! - compensation when the delivery window expires with no verdict
//!
//! The channel delivers packets in order, at most once, and invokes exactly
//! one terminal callback per transmitted packet. Everything else — transport
//! handshake, routing, consensus — lives outside this crate.
//!
//! ## Module Structure
//!
//! ```text
//! pl-blog-sync/
//! ├── domain/          # Post, SentPost, TimedoutPost, packet types, errors
//! ├── ports/           # BlogSyncApi, PostStore, ChannelGateway, PacketCodec
//! ├── adapters/        # In-memory store, gateway, JSON codec
//! └── service.rs       # BlogSyncService — the lifecycle coordinator
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryChannelGateway, InMemoryPostStore, JsonPacketCodec};
pub use domain::{
    apply_update, build_packet, commit_shadow, compensation_for, invariant_deadline_set,
    invariant_update_well_formed, AckEnvelope, AckErrorPolicy, AckStatus, BlogSyncConfig,
    BlogSyncError, DeliveryDeadline, DeliveryState, Packet, Post, PostId, Route, SentPost,
    TimedoutPost, UpdatePostAck, UpdatePostData,
};
pub use ports::{BlogSyncApi, ChannelGateway, PacketCodec, PostStore, RecvOutcome};
pub use service::BlogSyncService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
