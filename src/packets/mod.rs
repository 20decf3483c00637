//! Wire-level packet handling for the F1 2020 UDP protocol.
//!
//! The game emits fixed-layout little-endian packets, each prefixed with a
//! 24-byte header. The header carries no length field, so framing relies on
//! the per-type sizes being known: a datagram may contain several packets
//! back to back and the decoder walks them using [`wire_size`].
//!
//! | Id | Packet              | Size | Consumed |
//! |----|---------------------|------|----------|
//! | 0  | Motion              | 1464 | skipped  |
//! | 1  | Session             | 251  | yes      |
//! | 2  | LapData             | 1190 | yes      |
//! | 3  | Event               | 35   | yes      |
//! | 4  | Participants        | 1213 | yes      |
//! | 5  | CarSetups           | 1102 | skipped  |
//! | 6  | CarTelemetry        | 1307 | yes      |
//! | 7  | CarStatus           | 1344 | yes      |
//! | 8  | FinalClassification | 839  | yes      |
//! | 9  | LobbyInfo           | 1169 | skipped  |

pub mod classification;
pub mod cursor;
pub mod decoder;
pub mod event;
pub mod header;
pub mod lap;
pub mod participants;
pub mod session;
pub mod status;
pub mod telemetry;
pub mod testutil;

pub use classification::{ClassificationPacket, ClassificationWireEntry};
pub use cursor::Cursor;
pub use decoder::PacketDecoder;
pub use event::{EventCode, EventDetail, EventPacket};
pub use header::{HEADER_SIZE, PACKET_FORMAT_2020, PacketHeader, SPECTATOR_CAR_INDEX};
pub use lap::{LapDataEntry, LapPacket, NUM_CARS};
pub use participants::{ParticipantEntry, ParticipantsPacket};
pub use session::SessionPacket;
pub use status::{CarStatusEntry, CarStatusPacket};
pub use telemetry::{CarTelemetryEntry, CarTelemetryPacket};

/// Packet type discriminator from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketId {
    Motion,
    Session,
    LapData,
    Event,
    Participants,
    CarSetups,
    CarTelemetry,
    CarStatus,
    FinalClassification,
    LobbyInfo,
    Unknown(u8),
}

impl From<u8> for PacketId {
    fn from(id: u8) -> Self {
        match id {
            0 => PacketId::Motion,
            1 => PacketId::Session,
            2 => PacketId::LapData,
            3 => PacketId::Event,
            4 => PacketId::Participants,
            5 => PacketId::CarSetups,
            6 => PacketId::CarTelemetry,
            7 => PacketId::CarStatus,
            8 => PacketId::FinalClassification,
            9 => PacketId::LobbyInfo,
            other => PacketId::Unknown(other),
        }
    }
}

/// Fixed wire size of a packet, including its header.
///
/// Returns `None` for ids outside the 2020 protocol, in which case the rest
/// of the datagram cannot be framed.
pub fn wire_size(id: PacketId) -> Option<usize> {
    match id {
        PacketId::Motion => Some(1464),
        PacketId::Session => Some(session::SESSION_PACKET_SIZE),
        PacketId::LapData => Some(lap::LAP_PACKET_SIZE),
        PacketId::Event => Some(event::EVENT_PACKET_SIZE),
        PacketId::Participants => Some(participants::PARTICIPANTS_PACKET_SIZE),
        PacketId::CarSetups => Some(1102),
        PacketId::CarTelemetry => Some(telemetry::CAR_TELEMETRY_PACKET_SIZE),
        PacketId::CarStatus => Some(status::CAR_STATUS_PACKET_SIZE),
        PacketId::FinalClassification => Some(classification::CLASSIFICATION_PACKET_SIZE),
        PacketId::LobbyInfo => Some(1169),
        PacketId::Unknown(_) => None,
    }
}
