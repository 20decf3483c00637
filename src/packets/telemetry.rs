//! Car telemetry packet (id 6): temperatures, inputs, RPM per car.

use super::cursor::Cursor;
use super::header::HEADER_SIZE;
use super::lap::NUM_CARS;
use crate::Result;

/// Wire size of one car telemetry entry.
pub const CAR_TELEMETRY_ENTRY_SIZE: usize = 58;

/// Fixed wire size of the CarTelemetry packet (per-car table + MFD trailer).
pub const CAR_TELEMETRY_PACKET_SIZE: usize =
    HEADER_SIZE + NUM_CARS * CAR_TELEMETRY_ENTRY_SIZE + 7;

/// One car's telemetry entry.
///
/// All four-corner arrays are wire-ordered `[RL, RR, FL, FR]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CarTelemetryEntry {
    pub speed_kmh: u16,
    pub throttle: f32,
    pub steer: f32,
    pub brake: f32,
    pub clutch: u8,
    pub gear: i8,
    pub engine_rpm: u16,
    pub drs: u8,
    pub rev_lights_percent: u8,
    pub brakes_temperature: [u16; 4],
    pub tyres_surface_temperature: [u8; 4],
    pub tyres_inner_temperature: [u8; 4],
    pub engine_temperature: u16,
    pub tyres_pressure: [f32; 4],
    pub surface_type: [u8; 4],
}

impl CarTelemetryEntry {
    fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            speed_kmh: c.u16_le()?,
            throttle: c.f32_le()?,
            steer: c.f32_le()?,
            brake: c.f32_le()?,
            clutch: c.u8()?,
            gear: c.i8()?,
            engine_rpm: c.u16_le()?,
            drs: c.u8()?,
            rev_lights_percent: c.u8()?,
            brakes_temperature: c.u16_le_array()?,
            tyres_surface_temperature: c.u8_array()?,
            tyres_inner_temperature: c.u8_array()?,
            engine_temperature: c.u16_le()?,
            tyres_pressure: c.f32_le_array()?,
            surface_type: c.u8_array()?,
        })
    }
}

/// Parsed CarTelemetry packet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarTelemetryPacket {
    pub cars: [CarTelemetryEntry; NUM_CARS],
}

impl CarTelemetryPacket {
    /// Parse the body following the packet header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut cars = [CarTelemetryEntry::default(); NUM_CARS];
        for (i, slot) in cars.iter_mut().enumerate() {
            let mut c =
                Cursor::at(raw, HEADER_SIZE + i * CAR_TELEMETRY_ENTRY_SIZE, "car telemetry entry");
            *slot = CarTelemetryEntry::parse(&mut c)?;
        }
        Ok(Self { cars })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testutil::{TelemetryCar, telemetry_packet_bytes};

    #[test]
    fn parses_temperature_blocks() {
        let raw = telemetry_packet_bytes(&[TelemetryCar {
            index: 2,
            speed_kmh: 287,
            engine_temperature: 108,
            brakes_temperature: [450, 460, 700, 710],
            tyres_surface_temperature: [90, 91, 96, 97],
            tyres_inner_temperature: [100, 101, 104, 105],
        }]);
        let telemetry = CarTelemetryPacket::parse(&raw).unwrap();
        let car = &telemetry.cars[2];
        assert_eq!(car.speed_kmh, 287);
        assert_eq!(car.engine_temperature, 108);
        assert_eq!(car.brakes_temperature, [450, 460, 700, 710]);
        assert_eq!(car.tyres_surface_temperature, [90, 91, 96, 97]);
        assert_eq!(car.tyres_inner_temperature, [100, 101, 104, 105]);
    }

    #[test]
    fn rejects_truncated_table() {
        let raw = telemetry_packet_bytes(&[]);
        assert!(CarTelemetryPacket::parse(&raw[..HEADER_SIZE + 30]).is_err());
    }
}
