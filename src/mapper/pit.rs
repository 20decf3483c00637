//! Pit-lane state transitions: tire-change inference and penalty serving.
//!
//! The game never announces a tire change or a served penalty directly; both
//! are inferred from how the driver's status moves through the pit lane.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::Driver;
use crate::types::{DriverStatus, Infringement, PenaltyKind};

/// React to a status transition of one driver.
///
/// - Leaving `Pitting` records the compound now fitted as a new stint.
/// - `Pitlane → OnTrack` without a box stop means a drive-through was served.
/// - `Pitlane → OnTrack` after a box stop resets tire age and can serve one
///   pending stop-go style penalty; pit-lane-speeding penalties only count as
///   served once they are older than `speeding_serve_delay` (the game refuses
///   to let them be served immediately).
///
/// At most one penalty is marked served per pit visit, oldest first.
pub(crate) fn apply_status_transition(
    driver: &mut Driver,
    old_status: DriverStatus,
    now: Instant,
    speeding_serve_delay: Duration,
) {
    if old_status == DriverStatus::Pitting && driver.status != DriverStatus::Pitting {
        driver.visual_tyres.push(driver.visual_tyre);
        debug!(compound = ?driver.visual_tyre, stint = driver.visual_tyres.len(), "tire change inferred");
    }

    if old_status == DriverStatus::Pitlane && driver.status == DriverStatus::OnTrack {
        if !driver.has_pitted {
            // Through the lane without stopping: a drive-through was served.
            if let Some(penalty) = driver
                .pit_penalties
                .iter_mut()
                .find(|p| p.kind == PenaltyKind::DriveThrough && !p.served)
            {
                penalty.served = true;
                debug!("drive-through penalty served");
            }
        } else {
            driver.lap_tires_fitted = driver.lap_nr;
            driver.tyre_age = 0;

            for penalty in driver
                .pit_penalties
                .iter_mut()
                .filter(|p| p.kind != PenaltyKind::DriveThrough && !p.served)
            {
                if penalty.infringement == Infringement::PitLaneSpeeding {
                    if now.duration_since(penalty.issued_at) > speeding_serve_delay {
                        penalty.served = true;
                        debug!("pit-lane-speeding penalty served");
                        break;
                    }
                } else {
                    penalty.served = true;
                    debug!(kind = ?penalty.kind, "penalty served in pit stop");
                    break;
                }
            }
        }
        driver.has_pitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PenaltyRecord;
    use crate::types::VisualCompound;

    const SERVE_DELAY: Duration = Duration::from_secs(60);

    fn penalty(kind: PenaltyKind, infringement: Infringement, issued_at: Instant) -> PenaltyRecord {
        PenaltyRecord {
            event_index: 0,
            kind,
            infringement,
            lap_num: 1,
            served: false,
            issued_at,
        }
    }

    #[test]
    fn leaving_the_box_records_a_stint() {
        let mut driver = Driver::default();
        driver.visual_tyres.push(VisualCompound::Soft);
        driver.visual_tyre = VisualCompound::Medium;
        driver.status = DriverStatus::Pitlane;
        apply_status_transition(&mut driver, DriverStatus::Pitting, Instant::now(), SERVE_DELAY);
        assert_eq!(driver.visual_tyres, vec![VisualCompound::Soft, VisualCompound::Medium]);
    }

    #[test]
    fn drive_through_is_served_without_a_stop() {
        let mut driver = Driver::default();
        driver.pit_penalties.push(penalty(
            PenaltyKind::DriveThrough,
            Infringement::CornerCuttingGainedTime,
            Instant::now(),
        ));
        driver.status = DriverStatus::OnTrack;
        driver.has_pitted = false;
        apply_status_transition(&mut driver, DriverStatus::Pitlane, Instant::now(), SERVE_DELAY);
        assert!(driver.pit_penalties[0].served);
        // no stint was recorded: the car never stopped
        assert!(driver.visual_tyres.is_empty());
    }

    #[test]
    fn pit_stop_resets_tire_age_and_serves_stop_go() {
        let mut driver = Driver::default();
        driver.lap_nr = 12;
        driver.lap_tires_fitted = 3;
        driver.tyre_age = 9;
        driver.has_pitted = true;
        driver.status = DriverStatus::OnTrack;
        driver.pit_penalties.push(penalty(
            PenaltyKind::StopGo,
            Infringement::BigCollision,
            Instant::now(),
        ));

        apply_status_transition(&mut driver, DriverStatus::Pitlane, Instant::now(), SERVE_DELAY);

        assert_eq!(driver.lap_tires_fitted, 12);
        assert_eq!(driver.tyre_age, 0);
        assert!(driver.pit_penalties[0].served);
        assert!(!driver.has_pitted);
    }

    #[test]
    fn fresh_speeding_penalty_is_not_served() {
        let mut driver = Driver::default();
        driver.has_pitted = true;
        driver.status = DriverStatus::OnTrack;
        driver.pit_penalties.push(penalty(
            PenaltyKind::StopGo,
            Infringement::PitLaneSpeeding,
            Instant::now(),
        ));
        apply_status_transition(&mut driver, DriverStatus::Pitlane, Instant::now(), SERVE_DELAY);
        assert!(!driver.pit_penalties[0].served);
    }

    #[test]
    fn aged_speeding_penalty_is_served() {
        let issued = Instant::now().checked_sub(Duration::from_secs(90)).expect("clock too young");
        let mut driver = Driver::default();
        driver.has_pitted = true;
        driver.status = DriverStatus::OnTrack;
        driver.pit_penalties.push(penalty(
            PenaltyKind::StopGo,
            Infringement::PitLaneSpeeding,
            issued,
        ));
        apply_status_transition(&mut driver, DriverStatus::Pitlane, Instant::now(), SERVE_DELAY);
        assert!(driver.pit_penalties[0].served);
    }

    #[test]
    fn only_the_first_unserved_penalty_is_marked() {
        let mut driver = Driver::default();
        driver.has_pitted = true;
        driver.status = DriverStatus::OnTrack;
        driver.pit_penalties.push(penalty(
            PenaltyKind::StopGo,
            Infringement::BigCollision,
            Instant::now(),
        ));
        driver.pit_penalties.push(penalty(
            PenaltyKind::StopGo,
            Infringement::SmallCollision,
            Instant::now(),
        ));

        apply_status_transition(&mut driver, DriverStatus::Pitlane, Instant::now(), SERVE_DELAY);
        assert!(driver.pit_penalties[0].served);
        assert!(!driver.pit_penalties[1].served);

        // the next stop clears the second one, FIFO
        driver.has_pitted = true;
        apply_status_transition(&mut driver, DriverStatus::Pitlane, Instant::now(), SERVE_DELAY);
        assert!(driver.pit_penalties[1].served);
    }
}
