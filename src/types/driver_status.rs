//! Derived per-driver status.

use serde::{Deserialize, Serialize};

/// Where a driver currently is, derived from result status, pit status and
/// the game's driver-status byte in that precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DriverStatus {
    #[default]
    Garage,
    OnTrack,
    /// Driving through the pit lane.
    Pitlane,
    /// Stationary in the pit box.
    Pitting,
    /// Disqualified.
    Dsq,
    /// Retired or otherwise not classified.
    Dnf,
}

impl DriverStatus {
    /// True while the car is anywhere inside the pit lane.
    pub fn in_pits(&self) -> bool {
        matches!(self, DriverStatus::Pitlane | DriverStatus::Pitting)
    }

    /// True once the driver's session is over.
    pub fn is_out(&self) -> bool {
        matches!(self, DriverStatus::Dsq | DriverStatus::Dnf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pit_and_out_predicates() {
        assert!(DriverStatus::Pitlane.in_pits());
        assert!(DriverStatus::Pitting.in_pits());
        assert!(!DriverStatus::OnTrack.in_pits());
        assert!(DriverStatus::Dsq.is_out());
        assert!(DriverStatus::Dnf.is_out());
        assert!(!DriverStatus::Garage.is_out());
    }
}
