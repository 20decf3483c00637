//! Lap data packet (id 2): per-car timing, position, pit and result status.

use super::cursor::Cursor;
use super::header::HEADER_SIZE;
use crate::Result;

/// Number of car slots in every per-car packet.
pub const NUM_CARS: usize = 22;

/// Wire size of one per-car lap data entry.
pub const LAP_DATA_ENTRY_SIZE: usize = 53;

/// Fixed wire size of the LapData packet.
pub const LAP_PACKET_SIZE: usize = HEADER_SIZE + NUM_CARS * LAP_DATA_ENTRY_SIZE;

/// One car's lap timing entry.
///
/// Entry layout (53 bytes, little-endian): the leading timing block, a
/// best-lap/best-sector block that the model does not consume beyond
/// `best_lap_time`, distance/safety-car floats, then the status byte run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LapDataEntry {
    pub last_lap_time: f32,
    pub current_lap_time: f32,
    pub sector1_time_ms: u16,
    pub sector2_time_ms: u16,
    pub best_lap_time: f32,
    pub best_lap_num: u8,
    pub lap_distance: f32,
    pub total_distance: f32,
    pub safety_car_delta: f32,
    pub car_position: u8,
    pub current_lap_num: u8,
    pub pit_status: u8,
    pub sector: u8,
    pub current_lap_invalid: u8,
    pub penalties: u8,
    pub grid_position: u8,
    pub driver_status: u8,
    pub result_status: u8,
}

impl LapDataEntry {
    fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        let last_lap_time = c.f32_le()?;
        let current_lap_time = c.f32_le()?;
        let sector1_time_ms = c.u16_le()?;
        let sector2_time_ms = c.u16_le()?;
        let best_lap_time = c.f32_le()?;
        let best_lap_num = c.u8()?;
        c.skip(2)?; // bestLapSector1TimeInMS
        c.skip(2)?; // bestLapSector2TimeInMS
        c.skip(2)?; // bestLapSector3TimeInMS
        c.skip(3)?; // bestOverallSector1TimeInMS + lap num
        c.skip(3)?; // bestOverallSector2TimeInMS + lap num
        c.skip(3)?; // bestOverallSector3TimeInMS + lap num
        let lap_distance = c.f32_le()?;
        let total_distance = c.f32_le()?;
        let safety_car_delta = c.f32_le()?;
        let car_position = c.u8()?;
        let current_lap_num = c.u8()?;
        let pit_status = c.u8()?;
        let sector = c.u8()?;
        let current_lap_invalid = c.u8()?;
        let penalties = c.u8()?;
        let grid_position = c.u8()?;
        let driver_status = c.u8()?;
        let result_status = c.u8()?;

        Ok(Self {
            last_lap_time,
            current_lap_time,
            sector1_time_ms,
            sector2_time_ms,
            best_lap_time,
            best_lap_num,
            lap_distance,
            total_distance,
            safety_car_delta,
            car_position,
            current_lap_num,
            pit_status,
            sector,
            current_lap_invalid,
            penalties,
            grid_position,
            driver_status,
            result_status,
        })
    }
}

/// Parsed LapData packet: 22 per-car entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LapPacket {
    pub cars: [LapDataEntry; NUM_CARS],
}

impl LapPacket {
    /// Parse the body following the packet header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut cars = [LapDataEntry::default(); NUM_CARS];
        for (i, slot) in cars.iter_mut().enumerate() {
            let mut c = Cursor::at(raw, HEADER_SIZE + i * LAP_DATA_ENTRY_SIZE, "lap data entry");
            *slot = LapDataEntry::parse(&mut c)?;
        }
        Ok(Self { cars })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testutil::{LapCar, lap_packet_bytes};

    #[test]
    fn parses_per_car_timing() {
        let raw = lap_packet_bytes(
            0,
            &[LapCar {
                index: 3,
                last_lap_time: 95.432,
                current_lap_num: 2,
                car_position: 5,
                sector: 1,
                sector1_time_ms: 31_250,
                ..LapCar::default()
            }],
        );
        let lap = LapPacket::parse(&raw).unwrap();
        assert!((lap.cars[3].last_lap_time - 95.432).abs() < 1e-4);
        assert_eq!(lap.cars[3].current_lap_num, 2);
        assert_eq!(lap.cars[3].car_position, 5);
        assert_eq!(lap.cars[3].sector1_time_ms, 31_250);
        // untouched slots decode to their zeroed defaults
        assert_eq!(lap.cars[0], LapDataEntry::default());
    }

    #[test]
    fn rejects_truncated_entry_table() {
        let raw = lap_packet_bytes(0, &[]);
        assert!(LapPacket::parse(&raw[..LAP_PACKET_SIZE - 10]).is_err());
    }
}
