//! # Ports Layer
//!
//! Inbound API trait and outbound collaborator traits.

pub mod inbound;
pub mod outbound;

pub use inbound::{BlogSyncApi, RecvOutcome};
pub use outbound::{ChannelGateway, PacketCodec, PostStore};
