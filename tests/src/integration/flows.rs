//! # Integration Test Flows
//!
//! Tests that the lifecycle coordinator, the in-memory gateway, the post
//! store, and the JSON codec work together correctly, one lifecycle phase at
//! a time.
//!
//! ## Flows Tested
//!
//! 1. **Transmit**: shadow write + sequencing + capability enforcement
//! 2. **Receive**: decode-from-wire + apply + acknowledgement production
//! 3. **Reconcile**: envelope decode + shadow commit / rejection
//! 4. **Timeout**: compensation append keyed by the failed route

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pl_blog_sync::{
        AckEnvelope, BlogSyncApi, BlogSyncConfig, BlogSyncError, DeliveryDeadline, DeliveryState,
        InMemoryChannelGateway, InMemoryPostStore, JsonPacketCodec, PacketCodec, PostId, PostStore,
        Route, UpdatePostData,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Service =
        pl_blog_sync::BlogSyncService<InMemoryPostStore, InMemoryChannelGateway, JsonPacketCodec>;

    struct Domain {
        store: Arc<InMemoryPostStore>,
        gateway: Arc<InMemoryChannelGateway>,
        service: Service,
    }

    fn local_route() -> Route {
        Route::new("blog", "channel-0")
    }

    fn remote_route() -> Route {
        Route::new("blog", "channel-3")
    }

    /// One domain wired to a shared gateway.
    fn create_domain(gateway: Arc<InMemoryChannelGateway>) -> Domain {
        let store = Arc::new(InMemoryPostStore::new());
        let service = pl_blog_sync::BlogSyncService::new(
            BlogSyncConfig::default(),
            store.clone(),
            gateway.clone(),
            Arc::new(JsonPacketCodec::new()),
        );
        Domain {
            store,
            gateway,
            service,
        }
    }

    fn create_sender() -> Domain {
        let gateway = Arc::new(InMemoryChannelGateway::new());
        gateway.open_channel(local_route(), remote_route());
        create_domain(gateway)
    }

    // =============================================================================
    // TRANSMIT FLOW
    // =============================================================================

    #[test]
    fn test_send_allocates_increasing_sequences() {
        let sender = create_sender();

        for expected in 1..=3u64 {
            let packet = sender
                .service
                .send_update(
                    UpdatePostData::new("7", "New", "y", "alice"),
                    local_route(),
                    DeliveryDeadline::at_height(100),
                )
                .unwrap();
            assert_eq!(packet.sequence, expected);
        }
    }

    #[test]
    fn test_spoofed_send_is_blocked() {
        let sender = create_sender();
        sender.gateway.revoke_send_capability(&local_route());

        let result = sender.service.send_update(
            UpdatePostData::new("7", "New", "y", "mallory"),
            local_route(),
            DeliveryDeadline::at_height(100),
        );
        assert!(matches!(result, Err(BlogSyncError::CapabilityDenied)));
        assert!(sender.gateway.sent_packets(&local_route()).is_empty());
    }

    #[test]
    fn test_sent_packet_is_tracked_in_flight() {
        let sender = create_sender();

        let packet = sender
            .service
            .send_update(
                UpdatePostData::new("7", "New", "y", "alice"),
                local_route(),
                DeliveryDeadline::at_timestamp(1_700_000_000),
            )
            .unwrap();

        assert_eq!(
            sender.gateway.packet_state(&local_route(), packet.sequence),
            Some(DeliveryState::Sent)
        );
    }

    // =============================================================================
    // RECEIVE FLOW
    // =============================================================================

    #[test]
    fn test_wire_bytes_decode_and_apply() {
        let sender = create_sender();
        let receiver = create_domain(sender.gateway.clone());
        let codec = JsonPacketCodec::new();

        let id = receiver.store.append_post("A", "x", "alice");
        let packet = sender
            .service
            .send_update(
                UpdatePostData::new(id.to_string(), "B", "y", "alice"),
                local_route(),
                DeliveryDeadline::at_height(100),
            )
            .unwrap();

        // The transport hands the receiver the decoded message.
        let data = codec.decode_update(&packet.data).unwrap();
        let outcome = receiver.service.on_recv_update(&packet, &data).unwrap();

        assert!(outcome.is_applied());
        let post = receiver.store.post(id).unwrap();
        assert_eq!(post.title, "B");
        assert_eq!(post.content, "y");
    }

    #[test]
    fn test_recv_garbage_payload_never_acks() {
        let sender = create_sender();
        let receiver = create_domain(sender.gateway.clone());
        let codec = JsonPacketCodec::new();

        let result = codec.decode_update(b"{\"post_id\":12}");
        assert!(matches!(result, Err(BlogSyncError::ValidationFailed(_))));
        assert_eq!(receiver.store.post_count(), 0);
    }

    // =============================================================================
    // RECONCILE FLOW
    // =============================================================================

    #[test]
    fn test_ack_envelope_over_the_wire() {
        let sender = create_sender();
        let codec = JsonPacketCodec::new();
        let data = UpdatePostData::new("7", "New", "y", "alice");

        let packet = sender
            .service
            .send_update(data.clone(), local_route(), DeliveryDeadline::at_height(100))
            .unwrap();

        // Receiver-side ack, encoded into the transport envelope and back.
        let ack_bytes = codec
            .encode_ack(&pl_blog_sync::UpdatePostAck::success())
            .unwrap();
        let envelope_bytes = codec
            .encode_ack_envelope(&AckEnvelope::Result(ack_bytes))
            .unwrap();
        let envelope = codec.decode_ack_envelope(&envelope_bytes).unwrap();

        sender
            .gateway
            .record_verdict(&local_route(), packet.sequence, DeliveryState::AckedSuccess)
            .unwrap();
        sender.service.on_ack_update(&packet, &data, envelope).unwrap();

        assert_eq!(sender.store.sent_post(PostId::new(7)).unwrap().title, "New");
    }

    #[test]
    fn test_unknown_envelope_shape_is_rejected_by_codec() {
        let codec = JsonPacketCodec::new();
        let result = codec.decode_ack_envelope(br#"{"outcome":"fine"}"#);
        assert!(matches!(result, Err(BlogSyncError::InvalidAckFormat)));
    }

    #[test]
    fn test_ack_for_unshadowed_packet_is_an_error() {
        let sender = create_sender();
        let codec = JsonPacketCodec::new();

        // Transmit without the command layer, so no shadow exists.
        let data = UpdatePostData::new("9", "New", "y", "alice");
        let packet = sender
            .service
            .transmit_update(&data, &local_route(), DeliveryDeadline::at_height(100))
            .unwrap();

        let ack_bytes = codec
            .encode_ack(&pl_blog_sync::UpdatePostAck::success())
            .unwrap();
        let result =
            sender
                .service
                .on_ack_update(&packet, &data, AckEnvelope::Result(ack_bytes));
        assert!(matches!(result, Err(BlogSyncError::SentPostNotFound(9))));
    }

    // =============================================================================
    // TIMEOUT FLOW
    // =============================================================================

    #[test]
    fn test_timeout_records_failed_route() {
        let sender = create_sender();
        let data = UpdatePostData::new("7", "T", "y", "bob");

        let packet = sender
            .service
            .send_update(data.clone(), local_route(), DeliveryDeadline::at_height(100))
            .unwrap();

        sender
            .gateway
            .record_verdict(&local_route(), packet.sequence, DeliveryState::TimedOut)
            .unwrap();
        sender.service.on_timeout_update(&packet, &data).unwrap();

        let log = sender.store.timedout_posts();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].creator, "bob");
        assert_eq!(log[0].title, "T");
        assert_eq!(log[0].chain, "blog-channel-3");
    }

    #[test]
    fn test_gateway_refuses_ack_after_timeout() {
        let sender = create_sender();
        let data = UpdatePostData::new("7", "T", "y", "bob");

        let packet = sender
            .service
            .send_update(data, local_route(), DeliveryDeadline::at_height(100))
            .unwrap();

        sender
            .gateway
            .record_verdict(&local_route(), packet.sequence, DeliveryState::TimedOut)
            .unwrap();
        let late_ack = sender.gateway.record_verdict(
            &local_route(),
            packet.sequence,
            DeliveryState::AckedSuccess,
        );
        assert!(matches!(late_ack, Err(BlogSyncError::DuplicateVerdict(_))));
    }
}
