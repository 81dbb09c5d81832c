//! # Adapters Layer
//!
//! In-memory implementations of the outbound ports. Production deployments
//! swap these for adapters over the node's storage and channel layers; the
//! test suite uses them as-is.

pub mod codec;
pub mod gateway;
pub mod post_store;

pub use codec::JsonPacketCodec;
pub use gateway::InMemoryChannelGateway;
pub use post_store::InMemoryPostStore;
