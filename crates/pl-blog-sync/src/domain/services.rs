//! Domain services for the packet lifecycle.
//!
//! Pure transition functions over state snapshots. The coordinator reads the
//! current entity, computes the successor here, and persists the result
//! inside the host's serialized execution unit; nothing in this module
//! touches storage.

use super::entities::{Packet, Post, SentPost, TimedoutPost, UpdatePostData};
use super::value_objects::{DeliveryDeadline, Route};

/// Apply an update to a post snapshot.
///
/// Title and content take the proposed values; id and creator are preserved.
pub fn apply_update(mut post: Post, data: &UpdatePostData) -> Post {
    post.title = data.title.clone();
    post.content = data.content.clone();
    post
}

/// Commit a confirmed update into the sent-post shadow snapshot.
pub fn commit_shadow(mut shadow: SentPost, data: &UpdatePostData) -> SentPost {
    shadow.title = data.title.clone();
    shadow
}

/// Compensation entry for a packet that never received a verdict.
pub fn compensation_for(packet: &Packet, data: &UpdatePostData) -> TimedoutPost {
    TimedoutPost {
        creator: data.creator.clone(),
        title: data.title.clone(),
        chain: packet.destination.chain_id(),
    }
}

/// Assemble a packet from its parts.
pub fn build_packet(
    payload: Vec<u8>,
    sequence: u64,
    source: Route,
    destination: Route,
    deadline: DeliveryDeadline,
) -> Packet {
    Packet {
        data: payload,
        sequence,
        source,
        destination,
        deadline,
    }
}
