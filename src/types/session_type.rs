//! Session type discriminator.

use serde::{Deserialize, Serialize};

/// Kind of session reported by the Session packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionType {
    #[default]
    Unknown,
    Practice1,
    Practice2,
    Practice3,
    ShortPractice,
    Qualifying1,
    Qualifying2,
    Qualifying3,
    ShortQualifying,
    OneShotQualifying,
    Race,
    Race2,
    TimeTrial,
    Other(u8),
}

impl SessionType {
    /// True for the practice and qualifying sessions where gaps are compared
    /// on best laps rather than on-track position.
    pub fn uses_best_lap_delta(&self) -> bool {
        matches!(
            self,
            SessionType::Practice1
                | SessionType::Practice2
                | SessionType::Practice3
                | SessionType::ShortPractice
                | SessionType::Qualifying1
                | SessionType::Qualifying2
                | SessionType::Qualifying3
                | SessionType::ShortQualifying
        )
    }
}

impl From<u8> for SessionType {
    fn from(id: u8) -> Self {
        match id {
            0 => SessionType::Unknown,
            1 => SessionType::Practice1,
            2 => SessionType::Practice2,
            3 => SessionType::Practice3,
            4 => SessionType::ShortPractice,
            5 => SessionType::Qualifying1,
            6 => SessionType::Qualifying2,
            7 => SessionType::Qualifying3,
            8 => SessionType::ShortQualifying,
            9 => SessionType::OneShotQualifying,
            10 => SessionType::Race,
            11 => SessionType::Race2,
            12 => SessionType::TimeTrial,
            other => SessionType::Other(other),
        }
    }
}
