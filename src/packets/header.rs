//! F1 2020 packet header (24 bytes, shared by every packet type).

use super::cursor::Cursor;
use crate::{Result, TelemetryError};

/// Size of the packet header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Wire value of the packet-format field for this protocol generation.
pub const PACKET_FORMAT_2020: u16 = 2020;

/// Player-car-index value reported while spectating.
pub const SPECTATOR_CAR_INDEX: u8 = 255;

/// Parsed 24-byte packet header.
///
/// Layout (little-endian):
///
/// | Offset | Field                     | Type |
/// |--------|---------------------------|------|
/// | 0      | packetFormat              | u16  |
/// | 2      | gameMajorVersion          | u8   |
/// | 3      | gameMinorVersion          | u8   |
/// | 4      | packetVersion             | u8   |
/// | 5      | packetId                  | u8   |
/// | 6      | sessionUID                | u64  |
/// | 14     | sessionTime               | f32  |
/// | 18     | frameIdentifier           | u32  |
/// | 22     | playerCarIndex            | u8   |
/// | 23     | secondaryPlayerCarIndex   | u8   |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PacketHeader {
    pub packet_format: u16,
    pub game_major_version: u8,
    pub game_minor_version: u8,
    pub packet_version: u8,
    pub packet_id: u8,
    pub session_uid: u64,
    pub session_time: f32,
    pub frame_identifier: u32,
    pub player_car_index: u8,
    pub secondary_player_car_index: u8,
}

impl PacketHeader {
    /// Parse the header from the start of `raw`.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        if raw.len() < HEADER_SIZE {
            return Err(TelemetryError::truncated("packet header", HEADER_SIZE, raw.len()));
        }
        let mut c = Cursor::new(raw, "packet header");
        Ok(Self {
            packet_format: c.u16_le()?,
            game_major_version: c.u8()?,
            game_minor_version: c.u8()?,
            packet_version: c.u8()?,
            packet_id: c.u8()?,
            session_uid: c.u64_le()?,
            session_time: c.f32_le()?,
            frame_identifier: c.u32_le()?,
            player_car_index: c.u8()?,
            secondary_player_car_index: c.u8()?,
        })
    }

    /// True while the local client is spectating rather than driving.
    pub fn is_spectating(&self) -> bool {
        self.player_car_index == SPECTATOR_CAR_INDEX
    }
}
