//! Per-driver state: identity, lap history, wear, penalties.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::types::{DriverStatus, Infringement, PenaltyKind, Team, TyreCompound, VisualCompound};

/// Lap slots preallocated per driver. The longest race distance on the 2020
/// calendar is 78 laps; the margin covers formation and overtime laps.
pub const MAX_LAPS: usize = 100;

/// Timing record for one lap of one driver.
///
/// A value of `0` means "not yet known": sector times are filled in once the
/// car crosses the respective boundary, the lap time once the next lap has
/// started.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    pub sector1: f32,
    pub sector2: f32,
    pub lap: f32,
    /// Race time from session start to the end of this lap.
    pub laps_accumulated: f32,
    /// Indices into the session event log of incidents filed on this lap.
    pub incidents: Vec<usize>,
}

impl Lap {
    fn reset(&mut self) {
        self.sector1 = 0.0;
        self.sector2 = 0.0;
        self.lap = 0.0;
        self.laps_accumulated = 0.0;
        self.incidents.clear();
    }
}

/// Four-corner wear, damage and temperature detail.
///
/// Corner fields are in car orientation (front/rear, left/right); the packet
/// layer already unscrambles the wire's `[RL, RR, FL, FR]` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WearDetail {
    pub wear_front_left: u8,
    pub wear_front_right: u8,
    pub wear_rear_left: u8,
    pub wear_rear_right: u8,
    pub damage_front_left: u8,
    pub damage_front_right: u8,
    pub temp_front_left_inner: u8,
    pub temp_front_right_inner: u8,
    pub temp_rear_left_inner: u8,
    pub temp_rear_right_inner: u8,
    pub temp_front_left_outer: u8,
    pub temp_front_right_outer: u8,
    pub temp_rear_left_outer: u8,
    pub temp_rear_right_outer: u8,
    pub temp_brake_front_left: u16,
    pub temp_brake_front_right: u16,
    pub temp_brake_rear_left: u16,
    pub temp_brake_rear_right: u16,
    pub temp_engine: u16,
}

/// A pit-relevant penalty tracked until the driver serves it.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyRecord {
    /// Index of the `PenaltyIssued` entry in the session event log.
    pub event_index: usize,
    pub kind: PenaltyKind,
    pub infringement: Infringement,
    pub lap_num: u8,
    pub served: bool,
    /// Receipt time, used for the pit-lane-speeding serve delay.
    pub issued_at: Instant,
}

/// State of one car slot.
///
/// Slots are fixed: the game's vehicle index is stable for the whole session,
/// so a driver who retires or disconnects keeps the slot with
/// `present = false`.
#[derive(Debug, Clone)]
pub struct Driver {
    pub present: bool,
    pub is_player: bool,
    /// Resolved display name (mapping > telemetry > team + race number).
    pub name: String,
    /// Name as delivered by the Participants packet.
    pub telemetry_name: String,
    /// Name resolved from the external mapping table, if any.
    pub mapped_name: String,
    pub team: Team,
    /// Race position, 1-based.
    pub position: u8,
    /// Current lap number, 1-based; 0 until the first LapData arrives.
    pub lap_nr: u8,
    /// Laps on the current tire set, reconstructed from observed pit stops.
    /// The wire's own tire-age field is not trusted.
    pub tyre_age: u8,
    pub tyre: TyreCompound,
    pub visual_tyre: VisualCompound,
    /// Stint history: every compound the driver has run, in order.
    pub visual_tyres: Vec<VisualCompound>,
    pub status: DriverStatus,
    /// Accumulated unserved time penalties in seconds.
    pub penalty_seconds: u8,
    /// Mean tire damage mapped to `[0, 1]`; saturates at 75% raw damage.
    pub tyre_damage: f32,
    /// Mean wing damage mapped to `[0, 1]`; saturates at 50% raw damage.
    pub car_damage: f32,
    pub wear_detail: WearDetail,
    pub laps: Vec<Lap>,
    pub pit_penalties: Vec<PenaltyRecord>,
    /// Best lap time this session, seconds; 0 until one is set.
    pub fastest_lap: f32,
    pub timedelta_to_player: f32,
    /// Delta before the most recent change, for trend display.
    pub last_timedelta_to_player: f32,
    pub timedelta_to_leader: f32,
    /// Lap on which the current tire set was fitted; 0 for the starting set.
    pub lap_tires_fitted: u8,
    pub(crate) has_pitted: bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self {
            present: false,
            is_player: false,
            name: String::new(),
            telemetry_name: String::new(),
            mapped_name: String::new(),
            team: Team::default(),
            position: 0,
            lap_nr: 0,
            tyre_age: 0,
            tyre: TyreCompound::default(),
            visual_tyre: VisualCompound::default(),
            visual_tyres: Vec::new(),
            status: DriverStatus::default(),
            penalty_seconds: 0,
            tyre_damage: 0.0,
            car_damage: 0.0,
            wear_detail: WearDetail::default(),
            laps: vec![Lap::default(); MAX_LAPS],
            pit_penalties: Vec::new(),
            fastest_lap: 0.0,
            timedelta_to_player: 0.0,
            last_timedelta_to_player: 0.0,
            timedelta_to_leader: 0.0,
            has_pitted: false,
            lap_tires_fitted: 0,
        }
    }
}

impl Driver {
    /// Return the slot to its post-construction state. Lap slots are reused,
    /// not reallocated.
    pub fn reset(&mut self) {
        self.present = false;
        self.is_player = false;
        self.name.clear();
        self.telemetry_name.clear();
        self.mapped_name.clear();
        self.team = Team::default();
        self.position = 0;
        self.lap_nr = 0;
        self.tyre_age = 0;
        self.tyre = TyreCompound::default();
        self.visual_tyre = VisualCompound::default();
        self.visual_tyres.clear();
        self.status = DriverStatus::default();
        self.penalty_seconds = 0;
        self.tyre_damage = 0.0;
        self.car_damage = 0.0;
        self.wear_detail = WearDetail::default();
        for lap in &mut self.laps {
            lap.reset();
        }
        self.pit_penalties.clear();
        self.fastest_lap = 0.0;
        self.timedelta_to_player = 0.0;
        self.last_timedelta_to_player = 0.0;
        self.timedelta_to_leader = 0.0;
        self.has_pitted = false;
        self.lap_tires_fitted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_driver_has_full_lap_table() {
        let driver = Driver::default();
        assert_eq!(driver.laps.len(), MAX_LAPS);
        assert!(!driver.present);
        assert_eq!(driver.lap_nr, 0);
    }

    #[test]
    fn reset_returns_to_post_construction_state() {
        let mut driver = Driver::default();
        driver.present = true;
        driver.name.push_str("P. Driver");
        driver.lap_nr = 7;
        driver.laps[3].lap = 91.2;
        driver.laps[3].incidents.push(2);
        driver.visual_tyres.push(VisualCompound::Soft);
        driver.has_pitted = true;

        driver.reset();

        assert!(!driver.present);
        assert!(driver.name.is_empty());
        assert_eq!(driver.lap_nr, 0);
        assert_eq!(driver.laps[3].lap, 0.0);
        assert!(driver.laps[3].incidents.is_empty());
        assert!(driver.visual_tyres.is_empty());
        assert!(!driver.has_pitted);
        assert_eq!(driver.laps.len(), MAX_LAPS);
    }
}
