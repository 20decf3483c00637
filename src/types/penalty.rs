//! Penalty and infringement codes carried by `PENA` events.

use serde::{Deserialize, Serialize};

/// Kind of penalty handed to a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyKind {
    DriveThrough,
    StopGo,
    GridPenalty,
    PenaltyReminder,
    TimePenalty,
    Warning,
    Disqualified,
    RemovedFromFormationLap,
    ParkedTooLongTimer,
    TyreRegulations,
    ThisLapInvalidated,
    ThisAndNextLapInvalidated,
    ThisLapInvalidatedWithoutReason,
    ThisAndNextLapInvalidatedWithoutReason,
    ThisAndPreviousLapInvalidated,
    ThisAndPreviousLapInvalidatedWithoutReason,
    Retired,
    BlackFlagTimer,
    Unknown(u8),
}

impl PenaltyKind {
    /// Penalties that are resolved through the pit lane (or end the driver's
    /// session outright). Only these are tracked in the per-driver pit
    /// penalty list.
    pub fn is_pit_relevant(&self) -> bool {
        matches!(
            self,
            PenaltyKind::DriveThrough
                | PenaltyKind::StopGo
                | PenaltyKind::Disqualified
                | PenaltyKind::Retired
        )
    }
}

impl From<u8> for PenaltyKind {
    fn from(id: u8) -> Self {
        match id {
            0 => PenaltyKind::DriveThrough,
            1 => PenaltyKind::StopGo,
            2 => PenaltyKind::GridPenalty,
            3 => PenaltyKind::PenaltyReminder,
            4 => PenaltyKind::TimePenalty,
            5 => PenaltyKind::Warning,
            6 => PenaltyKind::Disqualified,
            7 => PenaltyKind::RemovedFromFormationLap,
            8 => PenaltyKind::ParkedTooLongTimer,
            9 => PenaltyKind::TyreRegulations,
            10 => PenaltyKind::ThisLapInvalidated,
            11 => PenaltyKind::ThisAndNextLapInvalidated,
            12 => PenaltyKind::ThisLapInvalidatedWithoutReason,
            13 => PenaltyKind::ThisAndNextLapInvalidatedWithoutReason,
            14 => PenaltyKind::ThisAndPreviousLapInvalidated,
            15 => PenaltyKind::ThisAndPreviousLapInvalidatedWithoutReason,
            16 => PenaltyKind::Retired,
            17 => PenaltyKind::BlackFlagTimer,
            other => PenaltyKind::Unknown(other),
        }
    }
}

/// What the driver did to earn the penalty.
///
/// The wire defines several dozen codes; the ones the model reacts to are
/// named, the rest ride along as [`Infringement::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Infringement {
    BlockingBySlowDriving,
    BlockingByWrongWayDriving,
    ReversingOffTheStartLine,
    BigCollision,
    SmallCollision,
    CornerCuttingGainedTime,
    CrossedPitExitLane,
    IgnoringBlueFlags,
    IgnoringYellowFlags,
    IgnoringDriveThrough,
    TooManyDriveThroughs,
    PitLaneSpeeding,
    ParkedForTooLong,
    IgnoringTyreRegulations,
    Other(u8),
}

impl From<u8> for Infringement {
    fn from(id: u8) -> Self {
        match id {
            0 => Infringement::BlockingBySlowDriving,
            1 => Infringement::BlockingByWrongWayDriving,
            2 => Infringement::ReversingOffTheStartLine,
            3 => Infringement::BigCollision,
            4 => Infringement::SmallCollision,
            7 => Infringement::CornerCuttingGainedTime,
            10 => Infringement::CrossedPitExitLane,
            11 => Infringement::IgnoringBlueFlags,
            12 => Infringement::IgnoringYellowFlags,
            13 => Infringement::IgnoringDriveThrough,
            14 => Infringement::TooManyDriveThroughs,
            17 => Infringement::PitLaneSpeeding,
            18 => Infringement::ParkedForTooLong,
            19 => Infringement::IgnoringTyreRegulations,
            other => Infringement::Other(other),
        }
    }
}
