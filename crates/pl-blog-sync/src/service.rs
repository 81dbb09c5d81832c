//! # Blog Synchronization Service
//!
//! The packet lifecycle coordinator. Implements [`BlogSyncApi`] over three
//! outbound ports:
//! - [`PostStore`]: keyed storage for posts, shadows, and compensation
//! - [`ChannelGateway`]: route resolution, sequencing, capabilities, send
//! - [`PacketCodec`]: wire encoding for messages and acknowledgements
//!
//! Per transmitted packet the sender-side lifecycle is
//! `Created -> Sent -> {AckedSuccess, AckedFailure, TimedOut}`; the transport
//! invokes exactly one of `on_ack_update` / `on_timeout_update`, so the
//! coordinator never deduplicates or reorders. All operations run inside the
//! host's serialized execution unit and perform no internal locking.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    apply_update, build_packet, commit_shadow, compensation_for, invariant_deadline_set,
    invariant_update_well_formed, AckEnvelope, AckErrorPolicy, AckStatus, BlogSyncConfig,
    BlogSyncError, DeliveryDeadline, Packet, PostId, Route, SentPost, UpdatePostAck,
    UpdatePostData,
};
use crate::ports::inbound::{BlogSyncApi, RecvOutcome};
use crate::ports::outbound::{ChannelGateway, PacketCodec, PostStore};

/// Blog synchronization service.
///
/// Thread-safe and shareable via `Arc`; interior mutability lives in the
/// adapters, not here.
pub struct BlogSyncService<S, G, C>
where
    S: PostStore,
    G: ChannelGateway,
    C: PacketCodec,
{
    config: BlogSyncConfig,
    store: Arc<S>,
    gateway: Arc<G>,
    codec: Arc<C>,
}

impl<S, G, C> BlogSyncService<S, G, C>
where
    S: PostStore,
    G: ChannelGateway,
    C: PacketCodec,
{
    /// Create a new service.
    pub fn new(config: BlogSyncConfig, store: Arc<S>, gateway: Arc<G>, codec: Arc<C>) -> Self {
        Self {
            config,
            store,
            gateway,
            codec,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &BlogSyncConfig {
        &self.config
    }

    fn append_compensation(&self, packet: &Packet, data: &UpdatePostData) {
        let entry = compensation_for(packet, data);
        info!(
            "[pl-sync] recording compensation for post {} on {}",
            data.post_id, entry.chain
        );
        self.store.append_timedout_post(entry);
    }
}

impl<S, G, C> BlogSyncApi for BlogSyncService<S, G, C>
where
    S: PostStore,
    G: ChannelGateway,
    C: PacketCodec,
{
    fn send_update(
        &self,
        data: UpdatePostData,
        source: Route,
        deadline: DeliveryDeadline,
    ) -> Result<Packet, BlogSyncError> {
        invariant_update_well_formed(&data, self.config.max_title_len, self.config.max_content_len)?;
        let id = PostId::parse(&data.post_id)?;

        // Shadow before send: an acknowledgement arriving immediately after
        // the send must find the shadow in place.
        self.store
            .append_sent_post(SentPost::new(id, &data.title, &data.creator));

        self.transmit_update(&data, &source, deadline)
    }

    fn transmit_update(
        &self,
        data: &UpdatePostData,
        source: &Route,
        deadline: DeliveryDeadline,
    ) -> Result<Packet, BlogSyncError> {
        invariant_deadline_set(&deadline)?;

        let destination =
            self.gateway
                .resolve_route(source)
                .ok_or_else(|| BlogSyncError::RouteNotFound {
                    port: source.port.clone(),
                    channel: source.channel.clone(),
                })?;

        let sequence =
            self.gateway
                .next_send_sequence(source)
                .ok_or_else(|| BlogSyncError::SequenceExhausted {
                    port: source.port.clone(),
                    channel: source.channel.clone(),
                })?;

        if !self.gateway.check_send_capability(source) {
            return Err(BlogSyncError::CapabilityDenied);
        }

        let payload = self.codec.encode_update(data)?;
        let packet = build_packet(payload, sequence, source.clone(), destination, deadline);

        debug!(
            "[pl-sync] transmitting update for post {} seq {} on {}",
            data.post_id, packet.sequence, packet.source
        );
        self.gateway.send_packet(packet.clone())?;

        Ok(packet)
    }

    fn on_recv_update(
        &self,
        _packet: &Packet,
        data: &UpdatePostData,
    ) -> Result<RecvOutcome, BlogSyncError> {
        invariant_update_well_formed(data, self.config.max_title_len, self.config.max_content_len)?;
        let id = PostId::parse(&data.post_id)?;

        let Some(post) = self.store.post(id) else {
            warn!("[pl-sync] rejecting update for unknown post {}", id);
            return Ok(RecvOutcome::Rejected {
                ack: UpdatePostAck::failed(),
                reason: BlogSyncError::PostNotFound(id.value()),
            });
        };

        // Id and creator are not altered by an update.
        self.store.set_post(apply_update(post, data));

        info!("[pl-sync] applied update to post {}", id);
        Ok(RecvOutcome::Applied(UpdatePostAck::success()))
    }

    fn on_ack_update(
        &self,
        packet: &Packet,
        data: &UpdatePostData,
        envelope: AckEnvelope,
    ) -> Result<(), BlogSyncError> {
        match envelope {
            AckEnvelope::Error(err) => {
                warn!(
                    "[pl-sync] channel rejected packet seq {} on {}: {}",
                    packet.sequence, packet.source, err
                );
                match self.config.ack_error_policy {
                    AckErrorPolicy::Ignore => Ok(()),
                    AckErrorPolicy::Compensate => {
                        self.append_compensation(packet, data);
                        Ok(())
                    }
                }
            }
            AckEnvelope::Result(bytes) => {
                let ack = self.codec.decode_ack(&bytes)?;
                match ack.status {
                    AckStatus::Success => {
                        let id = PostId::parse(&data.post_id)?;
                        let sent = self
                            .store
                            .sent_post(id)
                            .ok_or(BlogSyncError::SentPostNotFound(id.value()))?;

                        // Commit the title from the original outbound message.
                        self.store.set_sent_post(commit_shadow(sent, data));

                        info!("[pl-sync] confirmed update for post {}", id);
                        Ok(())
                    }
                    AckStatus::Failed => {
                        warn!(
                            "[pl-sync] remote rejected update for post {}, shadow left pending",
                            data.post_id
                        );
                        Err(BlogSyncError::RemoteUpdateRejected)
                    }
                }
            }
        }
    }

    fn on_timeout_update(
        &self,
        packet: &Packet,
        data: &UpdatePostData,
    ) -> Result<(), BlogSyncError> {
        warn!(
            "[pl-sync] packet seq {} on {} timed out",
            packet.sequence, packet.source
        );
        self.append_compensation(packet, data);
        Ok(())
    }
}
