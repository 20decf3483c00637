//! Deterministic demo grid for UI development without the game running.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::model::SessionModel;
use crate::types::{DriverStatus, SessionType, Track, VisualCompound};

const GRID_SIZE: usize = 20;
const PLAYER_IDX: usize = 0;
const LAPS: usize = 4;
const SEED: u64 = 0x00F1_2020;

/// Fill the model with a plausible mid-race snapshot: 20 drivers, four laps
/// of timing, deltas, positions and some wear on the player's car. Seeded,
/// so every run produces the same grid.
pub(crate) fn insert_grid(model: &mut SessionModel) {
    model.reset();
    let mut rng = SmallRng::seed_from_u64(SEED);

    model.session.session_type = SessionType::Race;
    model.session.track = Track::Austria;
    model.session.total_laps = 10;
    model.session.current_lap = 5;
    model.session.session_finished = false;
    model.count_drivers = GRID_SIZE as u8;

    for i in 0..GRID_SIZE {
        let driver = &mut model.drivers[i];
        driver.name = format!("Dummy Data {}", i + 1);
        driver.present = true;
        driver.visual_tyre = match i {
            2 => VisualCompound::Medium,
            3 => VisualCompound::Hard,
            4 => VisualCompound::Intermediate,
            5 => VisualCompound::Wet,
            _ => VisualCompound::Soft,
        };
        if i == 6 {
            // one driver already on the second stint
            driver.visual_tyres.push(VisualCompound::Medium);
        }
        let compound = driver.visual_tyre;
        driver.visual_tyres.push(compound);
    }
    model.drivers[PLAYER_IDX].name = "Player".to_string();
    model.drivers[PLAYER_IDX].is_player = true;

    for i in 0..GRID_SIZE {
        let driver = &mut model.drivers[i];
        let mut accumulated = 0.0;
        for j in 0..LAPS {
            let sector1 = rng.gen_range(31.0..35.0);
            let sector2 = rng.gen_range(31.0..35.0);
            let lap = sector1 + sector2 + rng.gen_range(31.0..35.0);
            driver.laps[j].sector1 = sector1;
            driver.laps[j].sector2 = sector2;
            driver.laps[j].lap = lap;
            accumulated += lap;
            driver.laps[j].laps_accumulated = accumulated;
        }
        driver.lap_nr = LAPS as u8;
        driver.status = DriverStatus::OnTrack;
    }

    // Deltas relative to the player, at the lap line and one sector earlier.
    let player_last = &model.drivers[PLAYER_IDX].laps[LAPS - 1];
    let player_after_lap = player_last.laps_accumulated;
    let player_before_last_sector =
        player_after_lap - player_last.lap + player_last.sector1 + player_last.sector2;

    for i in 0..GRID_SIZE {
        let driver = &mut model.drivers[i];
        let last = &driver.laps[LAPS - 1];
        let after_lap = last.laps_accumulated;
        let before_last_sector = after_lap - last.lap + last.sector1 + last.sector2;
        driver.timedelta_to_player = after_lap - player_after_lap;
        driver.last_timedelta_to_player = before_last_sector - player_before_last_sector;
    }

    // Positions follow accumulated race time.
    let mut order: Vec<usize> = (0..GRID_SIZE).collect();
    order.sort_by(|&a, &b| {
        let ta = model.drivers[a].laps[LAPS - 1].laps_accumulated;
        let tb = model.drivers[b].laps[LAPS - 1].laps_accumulated;
        ta.total_cmp(&tb)
    });
    for (rank, &idx) in order.iter().enumerate() {
        model.drivers[idx].position = rank as u8 + 1;
    }
    let leader = order[0];
    let leader_after_lap = model.drivers[leader].laps[LAPS - 1].laps_accumulated;
    for i in 0..GRID_SIZE {
        model.drivers[i].timedelta_to_leader =
            model.drivers[i].laps[LAPS - 1].laps_accumulated - leader_after_lap;
    }

    let wear = &mut model.drivers[PLAYER_IDX].wear_detail;
    wear.wear_front_left = 39;
    wear.wear_front_right = 12;
    wear.wear_rear_left = 88;
    wear.wear_rear_right = 19;
    wear.damage_front_left = 35;
    wear.temp_front_left_outer = 130;
    wear.temp_front_left_inner = 95;
    wear.temp_front_right_outer = 100;
    wear.temp_front_right_inner = 77;
}
