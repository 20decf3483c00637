//! Car status packet (id 7): tires, wear, damage, fuel and ERS per car.

use super::cursor::Cursor;
use super::header::HEADER_SIZE;
use super::lap::NUM_CARS;
use crate::Result;

/// Wire size of one car status entry.
pub const CAR_STATUS_ENTRY_SIZE: usize = 60;

/// Fixed wire size of the CarStatus packet.
pub const CAR_STATUS_PACKET_SIZE: usize = HEADER_SIZE + NUM_CARS * CAR_STATUS_ENTRY_SIZE;

/// One car's status entry.
///
/// Wear and damage arrays are wire-ordered `[RL, RR, FL, FR]`.
/// `tyres_age_laps` is decoded but not trusted by the model: the game reports
/// stale values after pit stops, so tire age is reconstructed from observed
/// pit-stop laps instead.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CarStatusEntry {
    pub traction_control: u8,
    pub anti_lock_brakes: u8,
    pub fuel_mix: u8,
    pub front_brake_bias: u8,
    pub pit_limiter_status: u8,
    pub fuel_in_tank: f32,
    pub fuel_capacity: f32,
    pub fuel_remaining_laps: f32,
    pub max_rpm: u16,
    pub idle_rpm: u16,
    pub max_gears: u8,
    pub drs_allowed: u8,
    pub drs_activation_distance: u16,
    pub tyres_wear: [u8; 4],
    pub actual_tyre_compound: u8,
    pub visual_tyre_compound: u8,
    pub tyres_age_laps: u8,
    pub tyres_damage: [u8; 4],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
    pub drs_fault: u8,
    pub engine_damage: u8,
    pub gear_box_damage: u8,
    pub vehicle_fia_flags: i8,
    pub ers_store_energy: f32,
    pub ers_deploy_mode: u8,
    pub ers_harvested_mguk: f32,
    pub ers_harvested_mguh: f32,
    pub ers_deployed: f32,
}

impl CarStatusEntry {
    fn parse(c: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            traction_control: c.u8()?,
            anti_lock_brakes: c.u8()?,
            fuel_mix: c.u8()?,
            front_brake_bias: c.u8()?,
            pit_limiter_status: c.u8()?,
            fuel_in_tank: c.f32_le()?,
            fuel_capacity: c.f32_le()?,
            fuel_remaining_laps: c.f32_le()?,
            max_rpm: c.u16_le()?,
            idle_rpm: c.u16_le()?,
            max_gears: c.u8()?,
            drs_allowed: c.u8()?,
            drs_activation_distance: c.u16_le()?,
            tyres_wear: c.u8_array()?,
            actual_tyre_compound: c.u8()?,
            visual_tyre_compound: c.u8()?,
            tyres_age_laps: c.u8()?,
            tyres_damage: c.u8_array()?,
            front_left_wing_damage: c.u8()?,
            front_right_wing_damage: c.u8()?,
            rear_wing_damage: c.u8()?,
            drs_fault: c.u8()?,
            engine_damage: c.u8()?,
            gear_box_damage: c.u8()?,
            vehicle_fia_flags: c.i8()?,
            ers_store_energy: c.f32_le()?,
            ers_deploy_mode: c.u8()?,
            ers_harvested_mguk: c.f32_le()?,
            ers_harvested_mguh: c.f32_le()?,
            ers_deployed: c.f32_le()?,
        })
    }
}

/// Parsed CarStatus packet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarStatusPacket {
    pub cars: [CarStatusEntry; NUM_CARS],
}

impl CarStatusPacket {
    /// Parse the body following the packet header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let mut cars = [CarStatusEntry::default(); NUM_CARS];
        for (i, slot) in cars.iter_mut().enumerate() {
            let mut c =
                Cursor::at(raw, HEADER_SIZE + i * CAR_STATUS_ENTRY_SIZE, "car status entry");
            *slot = CarStatusEntry::parse(&mut c)?;
        }
        Ok(Self { cars })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testutil::{StatusCar, status_packet_bytes};

    #[test]
    fn parses_tyres_and_damage() {
        let raw = status_packet_bytes(&[StatusCar {
            index: 1,
            actual_tyre_compound: 16,
            visual_tyre_compound: 16,
            tyres_wear: [12, 14, 30, 28],
            tyres_damage: [10, 10, 20, 20],
            front_left_wing_damage: 35,
            front_right_wing_damage: 5,
            rear_wing_damage: 0,
        }]);
        let status = CarStatusPacket::parse(&raw).unwrap();
        let car = &status.cars[1];
        assert_eq!(car.actual_tyre_compound, 16);
        assert_eq!(car.visual_tyre_compound, 16);
        assert_eq!(car.tyres_wear, [12, 14, 30, 28]);
        assert_eq!(car.tyres_damage, [10, 10, 20, 20]);
        assert_eq!(car.front_left_wing_damage, 35);
    }

    #[test]
    fn rejects_truncated_table() {
        let raw = status_packet_bytes(&[]);
        assert!(CarStatusPacket::parse(&raw[..raw.len() - 1]).is_err());
    }
}
