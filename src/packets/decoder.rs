//! Stateful packet decoder: framing, dispatch, and latest-value retention.

use std::collections::VecDeque;

use tracing::{trace, warn};

use super::classification::ClassificationPacket;
use super::event::EventPacket;
use super::header::{PACKET_FORMAT_2020, PacketHeader};
use super::lap::LapPacket;
use super::participants::ParticipantsPacket;
use super::session::SessionPacket;
use super::status::CarStatusPacket;
use super::telemetry::CarTelemetryPacket;
use super::{PacketId, wire_size};
use crate::{Result, TelemetryError};

/// Decodes packets out of raw datagrams and retains the latest state of every
/// packet family the session model consumes.
///
/// State families (session, lap, participants, telemetry, status) are plain
/// last-write-wins snapshots. Events are queued and must be drained by the
/// interpreter, so an event can never be applied twice or dropped between
/// cycles. The final classification is handed over at most once via
/// [`PacketDecoder::take_classification`].
#[derive(Debug, Default)]
pub struct PacketDecoder {
    pub session: SessionPacket,
    pub lap: LapPacket,
    pub participants: ParticipantsPacket,
    pub telemetry: CarTelemetryPacket,
    pub status: CarStatusPacket,
    /// Header of the most recent LapData packet; carries the player car index.
    pub lap_header: PacketHeader,
    events: VecDeque<(PacketHeader, EventPacket)>,
    classification: Option<ClassificationPacket>,
}

impl PacketDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a single packet from the front of `buf`.
    ///
    /// Returns the number of bytes consumed so the caller can advance through
    /// a multi-packet datagram. A packet whose fixed size exceeds the
    /// remaining buffer rejects the buffer (UDP datagrams are whole or
    /// nothing); a packet that frames correctly but fails body parsing is
    /// skipped with its size consumed.
    pub fn decode_packet(&mut self, buf: &[u8]) -> Result<usize> {
        let header = PacketHeader::parse(buf)?;
        if header.packet_format != PACKET_FORMAT_2020 {
            // Packet sizes are format-specific; framing a 2021+ stream with
            // 2020 sizes would desynchronise on the first packet.
            return Err(TelemetryError::malformed(
                "packet header",
                format!("unsupported packet format {}", header.packet_format),
            ));
        }
        let id = PacketId::from(header.packet_id);
        let size = wire_size(id).ok_or_else(|| {
            TelemetryError::malformed("packet header", format!("unknown packet id {}", header.packet_id))
        })?;
        if size > buf.len() {
            return Err(TelemetryError::truncated("packet body", size, buf.len()));
        }

        let packet = &buf[..size];
        if let Err(err) = self.dispatch(id, &header, packet) {
            // Framing was sound, the body was not: drop this packet only.
            warn!(packet_id = header.packet_id, error = %err, "dropping malformed packet body");
        }
        Ok(size)
    }

    fn dispatch(&mut self, id: PacketId, header: &PacketHeader, packet: &[u8]) -> Result<()> {
        trace!(packet_id = header.packet_id, len = packet.len(), "decoding packet");
        match id {
            PacketId::Session => self.session = SessionPacket::parse(packet)?,
            PacketId::LapData => {
                self.lap = LapPacket::parse(packet)?;
                self.lap_header = header.clone();
            }
            PacketId::Event => {
                let event = EventPacket::parse(packet)?;
                self.events.push_back((header.clone(), event));
            }
            PacketId::Participants => self.participants = ParticipantsPacket::parse(packet)?,
            PacketId::CarTelemetry => self.telemetry = CarTelemetryPacket::parse(packet)?,
            PacketId::CarStatus => self.status = CarStatusPacket::parse(packet)?,
            PacketId::FinalClassification => {
                self.classification = Some(ClassificationPacket::parse(packet)?);
            }
            PacketId::Motion | PacketId::CarSetups | PacketId::LobbyInfo | PacketId::Unknown(_) => {}
        }
        Ok(())
    }

    /// Pop the next undelivered event, if any.
    pub fn pop_event(&mut self) -> Option<(PacketHeader, EventPacket)> {
        self.events.pop_front()
    }

    /// Hand over the pending final classification. Moves it out, so a
    /// classification is delivered at most once.
    pub fn take_classification(&mut self) -> Option<ClassificationPacket> {
        self.classification.take()
    }

    /// Forget all retained packet state.
    ///
    /// Called on session start so nothing from the previous session leaks
    /// into the fresh model: stale lap data would otherwise repopulate lap
    /// numbers in the very next update cycle. Queued events are deliberately
    /// kept: any event behind the session start in the same datagram belongs
    /// to the new session.
    pub fn reset_retained_state(&mut self) {
        self.session = SessionPacket::default();
        self.lap = LapPacket::default();
        self.participants = ParticipantsPacket::default();
        self.telemetry = CarTelemetryPacket::default();
        self.status = CarStatusPacket::default();
        self.lap_header = PacketHeader::default();
        self.classification = None;
    }
}
