//! Participants packet (id 4): driver identity per car slot.

use super::cursor::Cursor;
use super::header::HEADER_SIZE;
use super::lap::NUM_CARS;
use crate::Result;

/// Wire size of one participant entry.
pub const PARTICIPANT_ENTRY_SIZE: usize = 54;

/// Fixed wire size of the Participants packet.
pub const PARTICIPANTS_PACKET_SIZE: usize = HEADER_SIZE + 1 + NUM_CARS * PARTICIPANT_ENTRY_SIZE;

const NAME_LEN: usize = 48;

/// One car slot's participant identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticipantEntry {
    pub ai_controlled: u8,
    /// Driver id; values below 100 are real (offline/AI) drivers with usable
    /// telemetry names, 100+ are network players.
    pub driver_id: u8,
    pub team_id: u8,
    pub race_number: u8,
    pub nationality: u8,
    /// UTF-8 driver name, truncated at the first NUL.
    pub name: String,
    pub your_telemetry: u8,
}

impl ParticipantEntry {
    /// True once the game has filled this slot. The wire reserves race number
    /// zero: slots are zero-initialised before the first Participants packet
    /// and no car races with number 0.
    pub fn has_data(&self) -> bool {
        self.race_number != 0
    }

    fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        let ai_controlled = c.u8()?;
        let driver_id = c.u8()?;
        let team_id = c.u8()?;
        let race_number = c.u8()?;
        let nationality = c.u8()?;
        let name_bytes: [u8; NAME_LEN] = c.u8_array()?;
        let your_telemetry = c.u8()?;

        let end = name_bytes.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        let name = String::from_utf8_lossy(&name_bytes[..end]).into_owned();

        Ok(Self { ai_controlled, driver_id, team_id, race_number, nationality, name, your_telemetry })
    }
}

/// Parsed Participants packet.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantsPacket {
    pub num_active_cars: u8,
    pub participants: Vec<ParticipantEntry>,
}

impl Default for ParticipantsPacket {
    /// All 22 slots empty, matching the zero-initialised state before the
    /// first Participants packet arrives.
    fn default() -> Self {
        Self { num_active_cars: 0, participants: vec![ParticipantEntry::default(); NUM_CARS] }
    }
}

impl ParticipantsPacket {
    /// Parse the body following the packet header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut c = Cursor::at(raw, HEADER_SIZE, "participants packet");
        let num_active_cars = c.u8()?;
        let mut participants = Vec::with_capacity(NUM_CARS);
        for _ in 0..NUM_CARS {
            participants.push(ParticipantEntry::parse(&mut c)?);
        }
        Ok(Self { num_active_cars, participants })
    }
}
