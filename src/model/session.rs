//! Session-level state.

use serde::{Deserialize, Serialize};

use crate::types::{SessionType, Track};

/// Session-wide information refreshed from every Session packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub track: Track,
    pub session_type: SessionType,
    pub total_laps: u8,
    /// Leading lap of the field, 1-based. Monotone within a session and
    /// clamped to `total_laps` so the slow-down lap does not count past the
    /// end of the race.
    pub current_lap: u8,
    /// Session time remaining in seconds.
    pub remaining_time: u16,
    pub session_finished: bool,
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            track: Track::default(),
            session_type: SessionType::default(),
            total_laps: 0,
            current_lap: 1,
            remaining_time: 0,
            session_finished: false,
        }
    }
}
