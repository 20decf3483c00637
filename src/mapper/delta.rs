//! Time-delta computation between two cars.
//!
//! Race sessions compare accumulated race time at the most advanced lap or
//! sector boundary both cars have crossed. Practice and qualifying sessions
//! compare best laps instead: on-track gaps are meaningless there.

use crate::model::Driver;

/// Sector-boundary granularity inside a lap, in walk-back order.
///
/// `Full` is the lap line, `Two` the end of sector 2, `One` the end of
/// sector 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    One,
    Two,
    Full,
}

impl Boundary {
    fn step_down(self) -> Option<Boundary> {
        match self {
            Boundary::Full => Some(Boundary::Two),
            Boundary::Two => Some(Boundary::One),
            Boundary::One => None,
        }
    }
}

/// Best-lap delta: positive when the opponent is slower than the reference.
pub(crate) fn qualifying_delta(reference: &Driver, opponent: &Driver) -> f32 {
    opponent.fastest_lap - reference.fastest_lap
}

/// Accumulated race times of `reference` and `opponent` at the most advanced
/// boundary both cars have timing for.
///
/// Walks backwards from the reference car's current lap, lap line first, then
/// sector 2, then sector 1, then the previous lap. Returns `None` when no
/// common boundary exists yet (e.g. lap 1 before anyone finished sector 1).
pub(crate) fn race_times_at_common_boundary(
    reference: &Driver,
    opponent: &Driver,
) -> Option<(f32, f32)> {
    if reference.lap_nr == 0 {
        return None;
    }
    let mut lap_idx = (reference.lap_nr - 1) as usize;
    let mut boundary = Boundary::Full;

    loop {
        // The opponent may be laps down; drop to its lap before probing.
        if (opponent.lap_nr as usize) < lap_idx + 1 {
            if lap_idx == 0 {
                return None;
            }
            lap_idx -= 1;
            boundary = Boundary::Full;
            continue;
        }

        let r = reference.laps.get(lap_idx)?;
        let o = opponent.laps.get(lap_idx)?;
        let crossed = match boundary {
            Boundary::One => r.sector1 != 0.0 && o.sector1 != 0.0,
            Boundary::Two => r.sector2 != 0.0 && o.sector2 != 0.0,
            Boundary::Full => r.lap != 0.0 && o.lap != 0.0,
        };

        if crossed {
            let base_ref = if lap_idx > 0 { reference.laps[lap_idx - 1].laps_accumulated } else { 0.0 };
            let base_opp = if lap_idx > 0 { opponent.laps[lap_idx - 1].laps_accumulated } else { 0.0 };
            let (partial_ref, partial_opp) = match boundary {
                Boundary::One => (r.sector1, o.sector1),
                Boundary::Two => (r.sector1 + r.sector2, o.sector1 + o.sector2),
                Boundary::Full => (r.lap, o.lap),
            };
            return Some((base_ref + partial_ref, base_opp + partial_opp));
        }

        match boundary.step_down() {
            Some(next) => boundary = next,
            None => {
                if lap_idx == 0 {
                    return None;
                }
                lap_idx -= 1;
                boundary = Boundary::Full;
            }
        }
    }
}

/// Race delta against the player, penalties included: the reference serves
/// its pending seconds, the opponent gets credit for its own.
pub(crate) fn race_delta_to_player(
    reference: &Driver,
    opponent: &Driver,
    reference_penalties: u8,
    opponent_penalties: u8,
) -> Option<f32> {
    let (t_ref, t_opp) = race_times_at_common_boundary(reference, opponent)?;
    Some((t_ref + f32::from(reference_penalties)) - t_opp - f32::from(opponent_penalties))
}

/// Race delta against the leader, reported as positive distance back.
pub(crate) fn race_delta_to_leader(leader: &Driver, opponent: &Driver) -> Option<f32> {
    let (t_ref, t_opp) = race_times_at_common_boundary(leader, opponent)?;
    Some(-(t_ref - t_opp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_with_laps(laps: &[(f32, f32, f32)]) -> Driver {
        // (sector1, sector2, lap) per completed slot; lap_nr = laps.len() + 1
        let mut driver = Driver::default();
        let mut acc = 0.0;
        for (i, &(s1, s2, lap)) in laps.iter().enumerate() {
            driver.laps[i].sector1 = s1;
            driver.laps[i].sector2 = s2;
            driver.laps[i].lap = lap;
            if lap != 0.0 {
                acc += lap;
                driver.laps[i].laps_accumulated = acc;
            }
        }
        driver.lap_nr = laps.len() as u8 + 1;
        driver
    }

    #[test]
    fn qualifying_delta_is_best_lap_difference() {
        let mut reference = Driver::default();
        reference.fastest_lap = 85.100;
        let mut opponent = Driver::default();
        opponent.fastest_lap = 85.950;
        assert!((qualifying_delta(&reference, &opponent) - 0.850).abs() < 1e-4);
    }

    #[test]
    fn full_lap_boundary_compares_accumulated_times() {
        let reference = driver_with_laps(&[(30.0, 31.0, 100.0), (30.0, 31.0, 100.0), (30.0, 31.0, 100.0)]);
        let opponent = driver_with_laps(&[(30.5, 31.5, 101.0), (30.0, 31.0, 100.5), (30.0, 31.0, 101.0)]);
        let (t_ref, t_opp) = race_times_at_common_boundary(&reference, &opponent).unwrap();
        assert!((t_ref - 300.0).abs() < 1e-3);
        assert!((t_opp - 302.5).abs() < 1e-3);
    }

    #[test]
    fn penalties_shift_the_player_delta() {
        // scenario: ref accumulated 300.0, opp 302.5, ref has 5s pending
        let reference = driver_with_laps(&[(30.0, 31.0, 100.0), (30.0, 31.0, 100.0), (30.0, 31.0, 100.0)]);
        let opponent = driver_with_laps(&[(30.5, 31.5, 101.0), (30.0, 31.0, 100.5), (30.0, 31.0, 101.0)]);
        let delta = race_delta_to_player(&reference, &opponent, 5, 0).unwrap();
        assert!((delta - 2.5).abs() < 1e-3);
    }

    #[test]
    fn leader_delta_is_sign_flipped_without_penalties() {
        let leader = driver_with_laps(&[(30.0, 31.0, 100.0)]);
        let opponent = driver_with_laps(&[(30.5, 31.5, 102.0)]);
        let delta = race_delta_to_leader(&leader, &opponent).unwrap();
        assert!((delta - 2.0).abs() < 1e-3);
    }

    #[test]
    fn walks_back_to_sector_boundary_when_lap_incomplete() {
        // Reference is on lap 2 with only sector 1 timed; opponent likewise.
        let mut reference = driver_with_laps(&[(30.0, 31.0, 100.0)]);
        reference.laps[1].sector1 = 29.0;
        let mut opponent = driver_with_laps(&[(30.0, 31.0, 101.0)]);
        opponent.laps[1].sector1 = 30.0;
        reference.lap_nr = 2;
        opponent.lap_nr = 2;

        let (t_ref, t_opp) = race_times_at_common_boundary(&reference, &opponent).unwrap();
        assert!((t_ref - 129.0).abs() < 1e-3);
        assert!((t_opp - 131.0).abs() < 1e-3);
    }

    #[test]
    fn steps_down_to_lapped_opponent() {
        // Opponent is a lap behind: compare at the last lap it completed.
        let reference = driver_with_laps(&[(30.0, 31.0, 100.0), (30.0, 31.0, 100.0)]);
        let opponent = driver_with_laps(&[(31.0, 32.0, 104.0)]);
        let (t_ref, t_opp) = race_times_at_common_boundary(&reference, &opponent).unwrap();
        assert!((t_ref - 100.0).abs() < 1e-3);
        assert!((t_opp - 104.0).abs() < 1e-3);
    }

    #[test]
    fn no_common_boundary_yields_none() {
        let mut reference = Driver::default();
        reference.lap_nr = 1;
        let mut opponent = Driver::default();
        opponent.lap_nr = 1;
        assert!(race_times_at_common_boundary(&reference, &opponent).is_none());

        let idle = Driver::default();
        assert!(race_times_at_common_boundary(&idle, &opponent).is_none());
    }
}
