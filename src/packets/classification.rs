//! Final classification packet (id 8): end-of-session results, emitted once.

use super::cursor::Cursor;
use super::header::HEADER_SIZE;
use super::lap::NUM_CARS;
use crate::Result;

/// Wire size of one classification entry.
pub const CLASSIFICATION_ENTRY_SIZE: usize = 37;

/// Fixed wire size of the FinalClassification packet.
pub const CLASSIFICATION_PACKET_SIZE: usize =
    HEADER_SIZE + 1 + NUM_CARS * CLASSIFICATION_ENTRY_SIZE;

const TYRE_STINT_SLOTS: usize = 8;

/// One car's final classification entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassificationWireEntry {
    pub position: u8,
    pub num_laps: u8,
    pub grid_position: u8,
    pub points: u8,
    pub num_pit_stops: u8,
    pub result_status: u8,
    pub best_lap_time: f32,
    pub total_race_time: f64,
    pub penalties_time: u8,
    pub num_penalties: u8,
    pub num_tyre_stints: u8,
}

impl ClassificationWireEntry {
    fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        let position = c.u8()?;
        let num_laps = c.u8()?;
        let grid_position = c.u8()?;
        let points = c.u8()?;
        let num_pit_stops = c.u8()?;
        let result_status = c.u8()?;
        let best_lap_time = c.f32_le()?;
        let total_race_time = c.f64_le()?;
        let penalties_time = c.u8()?;
        let num_penalties = c.u8()?;
        let num_tyre_stints = c.u8()?;
        c.skip(TYRE_STINT_SLOTS)?; // tyreStintsActual
        c.skip(TYRE_STINT_SLOTS)?; // tyreStintsVisual

        Ok(Self {
            position,
            num_laps,
            grid_position,
            points,
            num_pit_stops,
            result_status,
            best_lap_time,
            total_race_time,
            penalties_time,
            num_penalties,
            num_tyre_stints,
        })
    }
}

/// Parsed FinalClassification packet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationPacket {
    pub num_cars: u8,
    pub cars: [ClassificationWireEntry; NUM_CARS],
}

impl ClassificationPacket {
    /// Parse the body following the packet header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut c = Cursor::at(raw, HEADER_SIZE, "classification packet");
        let num_cars = c.u8()?;
        let mut cars = [ClassificationWireEntry::default(); NUM_CARS];
        for slot in cars.iter_mut() {
            *slot = ClassificationWireEntry::parse(&mut c)?;
        }
        Ok(Self { num_cars, cars })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testutil::{ClassifiedCar, classification_packet_bytes};

    #[test]
    fn parses_results() {
        let raw = classification_packet_bytes(
            20,
            &[ClassifiedCar {
                index: 0,
                position: 1,
                num_laps: 10,
                grid_position: 3,
                points: 25,
                best_lap_time: 92.5,
                total_race_time: 960.25,
                penalties_time: 5,
                num_penalties: 1,
            }],
        );
        let parsed = ClassificationPacket::parse(&raw).unwrap();
        assert_eq!(parsed.num_cars, 20);
        let entry = &parsed.cars[0];
        assert_eq!(entry.position, 1);
        assert_eq!(entry.points, 25);
        assert!((entry.best_lap_time - 92.5).abs() < 1e-4);
        assert!((entry.total_race_time - 960.25).abs() < 1e-9);
        assert_eq!(entry.penalties_time, 5);
    }
}
