//! # Domain Layer
//!
//! Entities, value objects, errors, and invariants for cross-domain blog
//! synchronization.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod services;
pub mod value_objects;

pub use entities::{
    AckEnvelope, AckErrorPolicy, BlogSyncConfig, Packet, Post, SentPost, TimedoutPost,
    UpdatePostAck, UpdatePostData,
};
pub use errors::BlogSyncError;
pub use invariants::{invariant_deadline_set, invariant_update_well_formed};
pub use services::{apply_update, build_packet, commit_shadow, compensation_for};
pub use value_objects::{AckStatus, DeliveryDeadline, DeliveryState, PostId, Route};
