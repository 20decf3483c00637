//! Session event log entries.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::types::{Infringement, PenaltyKind};

/// What happened, with per-kind payload where the wire provides one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    SessionStarted,
    SessionEnded,
    FastestLap { lap_time: f32 },
    Retirement,
    DrsEnabled,
    DrsDisabled,
    TeamMateInPits,
    ChequeredFlag,
    RaceWinner,
    PenaltyIssued {
        kind: PenaltyKind,
        infringement: Infringement,
        lap_num: u8,
        other_vehicle_idx: u8,
        time_gained: u8,
        places_gained: u8,
    },
    SpeedTrap { speed: f32 },
}

/// One entry of the append-only session event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// Wall clock at receipt.
    pub time_code: SystemTime,
    pub kind: EventKind,
    /// Car the event concerns; zero for session-wide events.
    pub car_index: u8,
}

impl SessionEvent {
    pub fn new(kind: EventKind, car_index: u8) -> Self {
        Self { time_code: SystemTime::now(), kind, car_index }
    }
}
