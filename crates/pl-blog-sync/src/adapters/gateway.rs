//! In-Memory Channel Gateway Adapter
//!
//! Implements the `ChannelGateway` port: a route table, per-route send
//! sequences, a capability set, and an in-flight registry that tracks each
//! packet's delivery state and enforces a single terminal verdict.
//!
//! In production this would sit on the node's channel layer; here it doubles
//! as the transport harness for integration tests.

use crate::domain::{BlogSyncError, DeliveryState, Packet, Route};
use crate::ports::outbound::ChannelGateway;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

struct InFlightPacket {
    packet: Packet,
    state: DeliveryState,
}

/// In-memory channel gateway.
pub struct InMemoryChannelGateway {
    /// Local endpoint -> remote counterparty.
    routes: RwLock<HashMap<Route, Route>>,
    /// Next send sequence per open route.
    sequences: RwLock<HashMap<Route, u64>>,
    /// Routes whose send capability this module holds.
    capabilities: RwLock<HashSet<Route>>,
    /// (source route, sequence) -> packet awaiting its verdict.
    in_flight: RwLock<HashMap<(Route, u64), InFlightPacket>>,
}

impl InMemoryChannelGateway {
    /// Create a gateway with no channels.
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(HashMap::new()),
            sequences: RwLock::new(HashMap::new()),
            capabilities: RwLock::new(HashSet::new()),
            in_flight: RwLock::new(HashMap::new()),
        }
    }

    /// Open a channel: register the counterparty, start the sequence at 1,
    /// and grant the send capability for the local endpoint.
    pub fn open_channel(&self, local: Route, remote: Route) {
        debug!("[pl-sync] opening channel {} -> {}", local, remote);
        self.sequences.write().insert(local.clone(), 1);
        self.capabilities.write().insert(local.clone());
        self.routes.write().insert(local, remote);
    }

    /// Drop the send capability for a route. Sends are refused afterwards.
    pub fn revoke_send_capability(&self, route: &Route) {
        self.capabilities.write().remove(route);
    }

    /// Close a route's sequence allocation. The counterparty mapping stays
    /// so late verdicts can still be attributed.
    pub fn close_channel(&self, route: &Route) {
        debug!("[pl-sync] closing channel {}", route);
        self.sequences.write().remove(route);
    }

    /// Packets in flight on the route, in sequence order.
    pub fn sent_packets(&self, source: &Route) -> Vec<Packet> {
        let in_flight = self.in_flight.read();
        let mut packets: Vec<&InFlightPacket> = in_flight
            .iter()
            .filter(|((route, _), entry)| route == source && entry.state == DeliveryState::Sent)
            .map(|(_, entry)| entry)
            .collect();
        packets.sort_by_key(|entry| entry.packet.sequence);
        packets.iter().map(|entry| entry.packet.clone()).collect()
    }

    /// Record the terminal verdict for an in-flight packet.
    ///
    /// The transport invokes exactly one terminal callback per packet; a
    /// second verdict for the same sequence is refused.
    pub fn record_verdict(
        &self,
        source: &Route,
        sequence: u64,
        verdict: DeliveryState,
    ) -> Result<Packet, BlogSyncError> {
        let mut in_flight = self.in_flight.write();
        let entry = in_flight
            .get_mut(&(source.clone(), sequence))
            .ok_or_else(|| BlogSyncError::SendFailed(format!("unknown packet sequence {sequence}")))?;

        if !entry.state.can_transition_to(verdict) {
            warn!(
                "[pl-sync] refusing verdict {:?} for {} seq {} in state {:?}",
                verdict, source, sequence, entry.state
            );
            return Err(BlogSyncError::DuplicateVerdict(sequence));
        }
        entry.state = verdict;
        Ok(entry.packet.clone())
    }

    /// Delivery state of an in-flight packet, if known.
    pub fn packet_state(&self, source: &Route, sequence: u64) -> Option<DeliveryState> {
        self.in_flight
            .read()
            .get(&(source.clone(), sequence))
            .map(|entry| entry.state)
    }
}

impl Default for InMemoryChannelGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelGateway for InMemoryChannelGateway {
    fn resolve_route(&self, source: &Route) -> Option<Route> {
        self.routes.read().get(source).cloned()
    }

    fn next_send_sequence(&self, source: &Route) -> Option<u64> {
        self.sequences.read().get(source).copied()
    }

    fn check_send_capability(&self, source: &Route) -> bool {
        self.capabilities.read().contains(source)
    }

    fn send_packet(&self, packet: Packet) -> Result<(), BlogSyncError> {
        let mut sequences = self.sequences.write();
        let next = sequences
            .get_mut(&packet.source)
            .ok_or_else(|| BlogSyncError::SendFailed(format!("route {} is closed", packet.source)))?;

        if packet.sequence != *next {
            return Err(BlogSyncError::SendFailed(format!(
                "out-of-order send: expected sequence {}, got {}",
                *next, packet.sequence
            )));
        }
        *next += 1;

        debug!(
            "[pl-sync] sending packet seq {} on {} -> {}",
            packet.sequence, packet.source, packet.destination
        );
        self.in_flight.write().insert(
            (packet.source.clone(), packet.sequence),
            InFlightPacket {
                packet,
                state: DeliveryState::Sent,
            },
        );
        Ok(())
    }
}
