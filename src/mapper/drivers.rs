//! Per-cycle driver refresh.
//!
//! Runs once after every decoded packet, in a contractual order: active-car
//! count, session fields, names, lap-timing reconstruction, presence, player
//! and leader identification, then per-driver deltas, wear, status and team.

use std::time::{Duration, Instant};

use tracing::trace;

use super::names::{DriverNameMapping, update_driver_name};
use super::{delta, pit};
use crate::model::SessionModel;
use crate::packets::{CarStatusEntry, CarTelemetryEntry, LapDataEntry, NUM_CARS, PacketDecoder};
use crate::types::{DriverStatus, SessionType, Team, Track, TyreCompound, VisualCompound};

/// Wear fraction at which the tire-damage figure saturates to 1.0.
const TYRE_DAMAGE_SATURATION: f32 = 0.75;
/// Wing-damage fraction at which the car-damage figure saturates to 1.0.
const CAR_DAMAGE_SATURATION: f32 = 0.5;

pub(crate) fn update_drivers(
    decoder: &PacketDecoder,
    model: &mut SessionModel,
    mappings: &[DriverNameMapping],
    speeding_serve_delay: Duration,
    now: Instant,
) {
    // Keep drivers who left visible: the count only ever grows in a session.
    if decoder.participants.num_active_cars > model.count_drivers {
        model.count_drivers = decoder.participants.num_active_cars;
    }

    model.session.track = Track::from(decoder.session.track_id);
    model.session.session_type = SessionType::from(decoder.session.session_type);
    model.session.remaining_time = decoder.session.session_time_left;
    model.session.total_laps = decoder.session.total_laps;

    for i in 0..NUM_CARS {
        if model.drivers[i].telemetry_name.is_empty() {
            if let Some(participant) = decoder.participants.participants.get(i) {
                update_driver_name(&mut model.drivers[i], participant, mappings);
            }
        }
        refresh_lap_timing(model, i, &decoder.lap.cars[i]);
    }

    for i in 0..usize::from(model.count_drivers).min(NUM_CARS) {
        let driver = &mut model.drivers[i];
        match decoder.lap.cars[i].result_status {
            // 2 = active, 3 = finished; everything else is not on the list
            2 | 3 => driver.present = true,
            _ => {
                driver.present = false;
                driver.timedelta_to_player = 0.0;
            }
        }
    }

    let qualifying = model.session.session_type.uses_best_lap_delta();
    let leader_idx = model.leader_index();
    if let Some(l) = leader_idx {
        model.drivers[l].timedelta_to_leader = 0.0;
    }

    // The header's player index defaults to 0 before any real packet arrives;
    // once it points elsewhere the provisional flag on slot 0 must go.
    let player_idx = usize::from(decoder.lap_header.player_car_index);
    if player_idx != 0 {
        model.drivers[0].is_player = false;
    }
    let player_idx = (player_idx < NUM_CARS).then_some(player_idx);

    if let Some(p) = player_idx {
        model.drivers[p].is_player = true;
        model.drivers[p].timedelta_to_player = 0.0;
        if model.drivers[p].lap_nr == 0 {
            // No timing reference yet; deltas and wear wait for lap data.
            return;
        }
    }

    for i in 0..NUM_CARS {
        // Deltas, wear and tire state only make sense for cars on the list.
        if model.drivers[i].present {
            update_player_delta(model, i, player_idx, qualifying, &decoder.lap.cars[i]);
            update_leader_delta(model, i, leader_idx, qualifying);

            let driver = &mut model.drivers[i];
            update_wear_detail(driver, &decoder.telemetry.cars[i], &decoder.status.cars[i]);
            driver.fastest_lap = decoder.lap.cars[i].best_lap_time;
            driver.penalty_seconds = decoder.lap.cars[i].penalties;
            driver.tyre = TyreCompound::from(decoder.status.cars[i].actual_tyre_compound);
            driver.visual_tyre = VisualCompound::from(decoder.status.cars[i].visual_tyre_compound);
            if driver.visual_tyres.is_empty() && driver.visual_tyre.is_known() {
                // First compound of the session, recorded as stint one.
                driver.visual_tyres.push(driver.visual_tyre);
            }
        }

        // Status runs for every slot: a retired or disqualified car drops off
        // the presence list, yet its DNF/DSQ state must stay observable.
        let driver = &mut model.drivers[i];
        let old_status = driver.status;
        driver.status = classify_status(&decoder.lap.cars[i]);
        if driver.status == DriverStatus::Pitting {
            driver.has_pitted = true;
        }
        pit::apply_status_transition(driver, old_status, now, speeding_serve_delay);

        driver.team = Team::from(decoder.participants.participants[i].team_id);
    }
}

/// Lap-timing reconstruction for one driver.
///
/// The feed only exposes "current lap number" and "last lap time", so lap
/// history is rebuilt at rollover: when the lap number changes, the previous
/// slot receives its final time and accumulation while the new slot is
/// zeroed for the game to refill. Sector times arrive after the boundary is
/// crossed and are filled once, idempotently.
fn refresh_lap_timing(model: &mut SessionModel, i: usize, entry: &LapDataEntry) {
    let driver = &mut model.drivers[i];
    driver.position = entry.car_position;

    let mut leading_lap = 0u8;
    if driver.lap_nr != entry.current_lap_num {
        leading_lap = entry.current_lap_num;
        // A decreasing lap number would mean the feed rolled back; the new
        // value is trusted either way and old slots stay as they are.
        driver.lap_nr = entry.current_lap_num;
        driver.tyre_age = driver.lap_nr.saturating_sub(driver.lap_tires_fitted);

        let lap_nr = usize::from(driver.lap_nr);
        if lap_nr > 0 {
            if let Some(current) = driver.laps.get_mut(lap_nr - 1) {
                current.sector1 = 0.0;
                current.sector2 = 0.0;
                current.lap = 0.0;
            }
        }
        if lap_nr > 1 {
            let previous_acc =
                if lap_nr >= 3 { driver.laps.get(lap_nr - 3).map_or(0.0, |l| l.laps_accumulated) } else { 0.0 };
            if let Some(finished) = driver.laps.get_mut(lap_nr - 2) {
                finished.lap = entry.last_lap_time;
                finished.laps_accumulated = finished.lap + previous_acc;
                trace!(
                    driver = i,
                    lap = lap_nr - 1,
                    time = finished.lap,
                    accumulated = finished.laps_accumulated,
                    "lap completed"
                );
            }
        }
    } else if driver.lap_nr > 0 {
        if let Some(current) = driver.laps.get_mut(usize::from(driver.lap_nr) - 1) {
            if current.sector1 == 0.0 && entry.sector > 0 {
                current.sector1 = f32::from(entry.sector1_time_ms) / 1000.0;
            }
            if current.sector2 == 0.0 && entry.sector > 1 {
                current.sector2 = f32::from(entry.sector2_time_ms) / 1000.0;
            }
        }
    }

    if leading_lap > model.session.current_lap {
        // The post-race slow-down lap must not count past the race distance.
        model.session.current_lap = leading_lap.min(model.session.total_laps);
    }
}

fn update_player_delta(
    model: &mut SessionModel,
    i: usize,
    player_idx: Option<usize>,
    qualifying: bool,
    entry: &LapDataEntry,
) {
    let Some(p) = player_idx else {
        let car = &mut model.drivers[i];
        car.last_timedelta_to_player = 0.0;
        car.timedelta_to_player = 0.0;
        return;
    };
    if i == p {
        return;
    }

    let new_delta = if qualifying {
        Some(delta::qualifying_delta(&model.drivers[p], &model.drivers[i]))
    } else {
        delta::race_delta_to_player(
            &model.drivers[p],
            &model.drivers[i],
            model.drivers[p].penalty_seconds,
            entry.penalties,
        )
    };

    if let Some(new_delta) = new_delta {
        let car = &mut model.drivers[i];
        if new_delta != car.timedelta_to_player {
            car.last_timedelta_to_player = car.timedelta_to_player;
            car.timedelta_to_player = new_delta;
        }
    }
}

fn update_leader_delta(model: &mut SessionModel, i: usize, leader_idx: Option<usize>, qualifying: bool) {
    let Some(l) = leader_idx else { return };
    if i == l {
        return;
    }

    let new_delta = if qualifying {
        Some(delta::qualifying_delta(&model.drivers[l], &model.drivers[i]))
    } else {
        delta::race_delta_to_leader(&model.drivers[l], &model.drivers[i])
    };

    if let Some(new_delta) = new_delta {
        model.drivers[i].timedelta_to_leader = new_delta;
    }
}

/// Status precedence: the result status overrides everything, then the pit
/// status, then the game's driver-status byte.
fn classify_status(entry: &LapDataEntry) -> DriverStatus {
    match entry.result_status {
        4 => DriverStatus::Dsq,
        // 5 = not classified, 6 = retired; 7 is undocumented but shows up on
        // DNF cars in the wild
        5..=7 => DriverStatus::Dnf,
        _ => match entry.pit_status {
            1 => DriverStatus::Pitlane,
            2 => DriverStatus::Pitting,
            _ => match entry.driver_status {
                1..=4 => DriverStatus::OnTrack,
                _ => DriverStatus::Garage,
            },
        },
    }
}

/// Copy wear, damage and temperature detail for one driver.
///
/// Wire corner order is `[RL, RR, FL, FR]`.
fn update_wear_detail(
    driver: &mut crate::model::Driver,
    telemetry: &CarTelemetryEntry,
    status: &CarStatusEntry,
) {
    let wear = &mut driver.wear_detail;
    wear.temp_rear_left_inner = telemetry.tyres_inner_temperature[0];
    wear.temp_rear_right_inner = telemetry.tyres_inner_temperature[1];
    wear.temp_front_left_inner = telemetry.tyres_inner_temperature[2];
    wear.temp_front_right_inner = telemetry.tyres_inner_temperature[3];
    wear.temp_rear_left_outer = telemetry.tyres_surface_temperature[0];
    wear.temp_rear_right_outer = telemetry.tyres_surface_temperature[1];
    wear.temp_front_left_outer = telemetry.tyres_surface_temperature[2];
    wear.temp_front_right_outer = telemetry.tyres_surface_temperature[3];
    wear.temp_brake_rear_left = telemetry.brakes_temperature[0];
    wear.temp_brake_rear_right = telemetry.brakes_temperature[1];
    wear.temp_brake_front_left = telemetry.brakes_temperature[2];
    wear.temp_brake_front_right = telemetry.brakes_temperature[3];
    wear.temp_engine = telemetry.engine_temperature;

    wear.wear_rear_left = status.tyres_wear[0];
    wear.wear_rear_right = status.tyres_wear[1];
    wear.wear_front_left = status.tyres_wear[2];
    wear.wear_front_right = status.tyres_wear[3];
    wear.damage_front_left = status.front_left_wing_damage;
    wear.damage_front_right = status.front_right_wing_damage;

    // Mean tire damage, saturating: a set at 75% is as good as gone.
    let mean = status.tyres_damage.iter().map(|&d| f32::from(d)).sum::<f32>() / 400.0;
    driver.tyre_damage = if mean >= TYRE_DAMAGE_SATURATION { 1.0 } else { mean / TYRE_DAMAGE_SATURATION };

    let wings = f32::from(status.front_left_wing_damage)
        + f32::from(status.front_right_wing_damage)
        + f32::from(status.rear_wing_damage);
    let mean = wings / 300.0;
    driver.car_damage = if mean >= CAR_DAMAGE_SATURATION { 1.0 } else { mean / CAR_DAMAGE_SATURATION };
}
