//! Event packet (id 3): 4-ASCII event code plus a small per-code detail union.

use super::cursor::Cursor;
use super::header::HEADER_SIZE;
use crate::Result;

/// Fixed wire size of the Event packet.
pub const EVENT_PACKET_SIZE: usize = 35;

/// Number of bytes in the detail union following the event code.
const DETAIL_SIZE: usize = 7;

/// Raw 4-byte event code, e.g. `SSTA`, `PENA`.
pub type EventCode = [u8; 4];

/// Per-code payload decoded from the 7-byte detail union.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventDetail {
    /// `FTLP`: car index and the lap time that set the session fastest lap.
    FastestLap { vehicle_idx: u8, lap_time: f32 },
    /// `RTMT`
    Retirement { vehicle_idx: u8 },
    /// `TMPT`
    TeamMateInPits { vehicle_idx: u8 },
    /// `RCWN`
    RaceWinner { vehicle_idx: u8 },
    /// `PENA`: full penalty notification.
    Penalty {
        penalty_type: u8,
        infringement_type: u8,
        vehicle_idx: u8,
        other_vehicle_idx: u8,
        time: u8,
        lap_num: u8,
        places_gained: u8,
    },
    /// `SPTP`: car index and trap speed in km/h.
    SpeedTrap { vehicle_idx: u8, speed: f32 },
    /// Codes without a payload (`SSTA`, `SEND`, `DRSE`, `DRSD`, `CHQF`).
    None,
}

/// Parsed Event packet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventPacket {
    pub code: EventCode,
    pub detail: EventDetail,
    /// Raw detail bytes, kept for duplicate-delivery fingerprinting.
    pub detail_bytes: [u8; DETAIL_SIZE],
}

impl EventPacket {
    /// Parse the body following the packet header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut c = Cursor::at(raw, HEADER_SIZE, "event packet");
        let code: EventCode = c.u8_array()?;

        let mut detail_bytes = [0u8; DETAIL_SIZE];
        let remaining = raw.len().saturating_sub(c.position());
        // The game pads the union to 7 bytes but shorter payloads are accepted
        // for codes that carry none.
        let take = remaining.min(DETAIL_SIZE);
        detail_bytes[..take].copy_from_slice(&raw[c.position()..c.position() + take]);

        let detail = Self::decode_detail(&code, &detail_bytes);
        Ok(Self { code, detail, detail_bytes })
    }

    fn decode_detail(code: &EventCode, d: &[u8; DETAIL_SIZE]) -> EventDetail {
        match code {
            b"FTLP" => EventDetail::FastestLap {
                vehicle_idx: d[0],
                lap_time: f32::from_le_bytes([d[1], d[2], d[3], d[4]]),
            },
            b"RTMT" => EventDetail::Retirement { vehicle_idx: d[0] },
            b"TMPT" => EventDetail::TeamMateInPits { vehicle_idx: d[0] },
            b"RCWN" => EventDetail::RaceWinner { vehicle_idx: d[0] },
            b"PENA" => EventDetail::Penalty {
                penalty_type: d[0],
                infringement_type: d[1],
                vehicle_idx: d[2],
                other_vehicle_idx: d[3],
                time: d[4],
                lap_num: d[5],
                places_gained: d[6],
            },
            b"SPTP" => EventDetail::SpeedTrap {
                vehicle_idx: d[0],
                speed: f32::from_le_bytes([d[1], d[2], d[3], d[4]]),
            },
            _ => EventDetail::None,
        }
    }
}
