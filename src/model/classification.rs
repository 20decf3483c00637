//! Final classification records.

use serde::{Deserialize, Serialize};

/// One driver's end-of-session result, captured once from the
/// FinalClassification packet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    /// Slot of the driver in the model's driver array.
    pub driver_index: usize,
    pub position: u8,
    pub grid_position: u8,
    pub num_laps: u8,
    pub points: u8,
    pub best_lap_time: f32,
    pub total_race_time: f64,
    pub penalties_time: u8,
    pub num_penalties: u8,
}
