//! Synthetic packet builders.
//!
//! Builds byte-exact F1 2020 packets for unit tests, integration tests and
//! benchmarks. Fields not exposed by a builder stay zero, which matches the
//! game's zero-initialised defaults.

use super::classification::{CLASSIFICATION_ENTRY_SIZE, CLASSIFICATION_PACKET_SIZE};
use super::event::EVENT_PACKET_SIZE;
use super::header::{HEADER_SIZE, PACKET_FORMAT_2020};
use super::lap::{LAP_DATA_ENTRY_SIZE, LAP_PACKET_SIZE, NUM_CARS};
use super::participants::{PARTICIPANT_ENTRY_SIZE, PARTICIPANTS_PACKET_SIZE};
use super::session::SESSION_PACKET_SIZE;
use super::status::{CAR_STATUS_ENTRY_SIZE, CAR_STATUS_PACKET_SIZE};
use super::telemetry::{CAR_TELEMETRY_ENTRY_SIZE, CAR_TELEMETRY_PACKET_SIZE};

/// Build a 24-byte packet header for `packet_id` with the given player index.
pub fn header_bytes(packet_id: u8, player_car_index: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    buf.extend_from_slice(&PACKET_FORMAT_2020.to_le_bytes()); // packetFormat
    buf.push(1); // gameMajorVersion
    buf.push(18); // gameMinorVersion
    buf.push(1); // packetVersion
    buf.push(packet_id);
    buf.extend_from_slice(&0x00C0_FFEE_u64.to_le_bytes()); // sessionUID
    buf.extend_from_slice(&0.0f32.to_le_bytes()); // sessionTime
    buf.extend_from_slice(&0u32.to_le_bytes()); // frameIdentifier
    buf.push(player_car_index);
    buf.push(255); // secondaryPlayerCarIndex
    buf
}

/// Build a Session packet (id 1).
pub fn session_packet_bytes(track_id: i8, session_type: u8, total_laps: u8, time_left: u16) -> Vec<u8> {
    let mut buf = header_bytes(1, 0);
    buf.resize(SESSION_PACKET_SIZE, 0);
    let b = HEADER_SIZE;
    buf[b + 3] = total_laps;
    buf[b + 4..b + 6].copy_from_slice(&5300u16.to_le_bytes()); // trackLength
    buf[b + 6] = session_type;
    buf[b + 7] = track_id as u8;
    buf[b + 9..b + 11].copy_from_slice(&time_left.to_le_bytes());
    buf
}

/// Per-car overrides for [`lap_packet_bytes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LapCar {
    pub index: usize,
    pub last_lap_time: f32,
    pub current_lap_time: f32,
    pub sector1_time_ms: u16,
    pub sector2_time_ms: u16,
    pub best_lap_time: f32,
    pub car_position: u8,
    pub current_lap_num: u8,
    pub pit_status: u8,
    pub sector: u8,
    pub penalties: u8,
    pub driver_status: u8,
    pub result_status: u8,
}

/// Build a LapData packet (id 2).
pub fn lap_packet_bytes(player_car_index: u8, cars: &[LapCar]) -> Vec<u8> {
    let mut buf = header_bytes(2, player_car_index);
    buf.resize(LAP_PACKET_SIZE, 0);
    for car in cars {
        assert!(car.index < NUM_CARS);
        let b = HEADER_SIZE + car.index * LAP_DATA_ENTRY_SIZE;
        buf[b..b + 4].copy_from_slice(&car.last_lap_time.to_le_bytes());
        buf[b + 4..b + 8].copy_from_slice(&car.current_lap_time.to_le_bytes());
        buf[b + 8..b + 10].copy_from_slice(&car.sector1_time_ms.to_le_bytes());
        buf[b + 10..b + 12].copy_from_slice(&car.sector2_time_ms.to_le_bytes());
        buf[b + 12..b + 16].copy_from_slice(&car.best_lap_time.to_le_bytes());
        buf[b + 44] = car.car_position;
        buf[b + 45] = car.current_lap_num;
        buf[b + 46] = car.pit_status;
        buf[b + 47] = car.sector;
        buf[b + 49] = car.penalties;
        buf[b + 51] = car.driver_status;
        buf[b + 52] = car.result_status;
    }
    buf
}

/// Build an Event packet (id 3) with an arbitrary detail payload.
pub fn event_packet_bytes(code: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() <= 7);
    let mut buf = header_bytes(3, 0);
    buf.extend_from_slice(code);
    buf.extend_from_slice(payload);
    buf.resize(EVENT_PACKET_SIZE, 0);
    buf
}

/// Build a `PENA` event packet.
pub fn penalty_event_bytes(penalty_type: u8, infringement_type: u8, vehicle_idx: u8, lap_num: u8) -> Vec<u8> {
    event_packet_bytes(
        b"PENA",
        &[penalty_type, infringement_type, vehicle_idx, 255, 0, lap_num, 0],
    )
}

/// Per-car overrides for [`participants_packet_bytes`].
#[derive(Debug, Clone, Copy)]
pub struct Participant {
    pub index: usize,
    pub driver_id: u8,
    pub team_id: u8,
    pub race_number: u8,
    pub name: &'static str,
}

/// Build a Participants packet (id 4).
pub fn participants_packet_bytes(num_active_cars: u8, entries: &[Participant]) -> Vec<u8> {
    let mut buf = header_bytes(4, 0);
    buf.resize(PARTICIPANTS_PACKET_SIZE, 0);
    buf[HEADER_SIZE] = num_active_cars;
    for entry in entries {
        assert!(entry.index < NUM_CARS);
        let b = HEADER_SIZE + 1 + entry.index * PARTICIPANT_ENTRY_SIZE;
        buf[b + 1] = entry.driver_id;
        buf[b + 2] = entry.team_id;
        buf[b + 3] = entry.race_number;
        let name = entry.name.as_bytes();
        assert!(name.len() < 48);
        buf[b + 5..b + 5 + name.len()].copy_from_slice(name);
    }
    buf
}

/// Per-car overrides for [`telemetry_packet_bytes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryCar {
    pub index: usize,
    pub speed_kmh: u16,
    pub engine_temperature: u16,
    pub brakes_temperature: [u16; 4],
    pub tyres_surface_temperature: [u8; 4],
    pub tyres_inner_temperature: [u8; 4],
}

/// Build a CarTelemetry packet (id 6).
pub fn telemetry_packet_bytes(cars: &[TelemetryCar]) -> Vec<u8> {
    let mut buf = header_bytes(6, 0);
    buf.resize(CAR_TELEMETRY_PACKET_SIZE, 0);
    for car in cars {
        assert!(car.index < NUM_CARS);
        let b = HEADER_SIZE + car.index * CAR_TELEMETRY_ENTRY_SIZE;
        buf[b..b + 2].copy_from_slice(&car.speed_kmh.to_le_bytes());
        for (i, t) in car.brakes_temperature.iter().enumerate() {
            buf[b + 20 + i * 2..b + 22 + i * 2].copy_from_slice(&t.to_le_bytes());
        }
        buf[b + 28..b + 32].copy_from_slice(&car.tyres_surface_temperature);
        buf[b + 32..b + 36].copy_from_slice(&car.tyres_inner_temperature);
        buf[b + 36..b + 38].copy_from_slice(&car.engine_temperature.to_le_bytes());
    }
    buf
}

/// Per-car overrides for [`status_packet_bytes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCar {
    pub index: usize,
    pub actual_tyre_compound: u8,
    pub visual_tyre_compound: u8,
    pub tyres_wear: [u8; 4],
    pub tyres_damage: [u8; 4],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
}

/// Build a CarStatus packet (id 7).
pub fn status_packet_bytes(cars: &[StatusCar]) -> Vec<u8> {
    let mut buf = header_bytes(7, 0);
    buf.resize(CAR_STATUS_PACKET_SIZE, 0);
    for car in cars {
        assert!(car.index < NUM_CARS);
        let b = HEADER_SIZE + car.index * CAR_STATUS_ENTRY_SIZE;
        buf[b + 25..b + 29].copy_from_slice(&car.tyres_wear);
        buf[b + 29] = car.actual_tyre_compound;
        buf[b + 30] = car.visual_tyre_compound;
        buf[b + 32..b + 36].copy_from_slice(&car.tyres_damage);
        buf[b + 36] = car.front_left_wing_damage;
        buf[b + 37] = car.front_right_wing_damage;
        buf[b + 38] = car.rear_wing_damage;
    }
    buf
}

/// Per-car overrides for [`classification_packet_bytes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifiedCar {
    pub index: usize,
    pub position: u8,
    pub num_laps: u8,
    pub grid_position: u8,
    pub points: u8,
    pub best_lap_time: f32,
    pub total_race_time: f64,
    pub penalties_time: u8,
    pub num_penalties: u8,
}

/// Build a FinalClassification packet (id 8).
pub fn classification_packet_bytes(num_cars: u8, cars: &[ClassifiedCar]) -> Vec<u8> {
    let mut buf = header_bytes(8, 0);
    buf.resize(CLASSIFICATION_PACKET_SIZE, 0);
    buf[HEADER_SIZE] = num_cars;
    for car in cars {
        assert!(car.index < NUM_CARS);
        let b = HEADER_SIZE + 1 + car.index * CLASSIFICATION_ENTRY_SIZE;
        buf[b] = car.position;
        buf[b + 1] = car.num_laps;
        buf[b + 2] = car.grid_position;
        buf[b + 3] = car.points;
        buf[b + 6..b + 10].copy_from_slice(&car.best_lap_time.to_le_bytes());
        buf[b + 10..b + 18].copy_from_slice(&car.total_race_time.to_le_bytes());
        buf[b + 18] = car.penalties_time;
        buf[b + 19] = car.num_penalties;
    }
    buf
}
