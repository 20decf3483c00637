//! Tire compound codes, physical and visual.

use serde::{Deserialize, Serialize};

/// Physical compound fitted to the car (CarStatus `actualTyreCompound`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TyreCompound {
    #[default]
    Unknown,
    C1,
    C2,
    C3,
    C4,
    C5,
    Intermediate,
    Wet,
    /// F2 dry compound.
    DryClassic,
    /// F2 wet compound.
    WetClassic,
    Other(u8),
}

impl From<u8> for TyreCompound {
    fn from(id: u8) -> Self {
        match id {
            0 => TyreCompound::Unknown,
            7 => TyreCompound::Intermediate,
            8 => TyreCompound::Wet,
            9 => TyreCompound::DryClassic,
            10 => TyreCompound::WetClassic,
            16 => TyreCompound::C5,
            17 => TyreCompound::C4,
            18 => TyreCompound::C3,
            19 => TyreCompound::C2,
            20 => TyreCompound::C1,
            other => TyreCompound::Other(other),
        }
    }
}

/// Visual compound shown on the sidewall (CarStatus `visualTyreCompound`).
///
/// The model derives stints from this: every inferred tire change appends the
/// current visual compound to the driver's stint history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VisualCompound {
    /// Zero on the wire; reported before the first CarStatus packet arrives.
    #[default]
    Unknown,
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
    Other(u8),
}

impl VisualCompound {
    /// True once the game has reported a real compound for this car.
    pub fn is_known(&self) -> bool {
        !matches!(self, VisualCompound::Unknown)
    }
}

impl From<u8> for VisualCompound {
    fn from(id: u8) -> Self {
        match id {
            0 => VisualCompound::Unknown,
            7 => VisualCompound::Intermediate,
            8 => VisualCompound::Wet,
            16 => VisualCompound::Soft,
            17 => VisualCompound::Medium,
            18 => VisualCompound::Hard,
            other => VisualCompound::Other(other),
        }
    }
}
