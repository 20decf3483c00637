//! Constructor teams of the 2020 grid.

use serde::{Deserialize, Serialize};

/// Team behind a car slot. Ids above 9 cover the game's classic and
/// multiplayer liveries; they all collapse to [`Team::Classic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Team {
    Mercedes,
    Ferrari,
    RedBull,
    Williams,
    RacingPoint,
    Renault,
    AlphaTauri,
    Haas,
    McLaren,
    AlfaRomeo,
    #[default]
    Classic,
}

impl Team {
    /// Display name used when synthesising a driver name from team + number.
    pub fn display_name(&self) -> &'static str {
        match self {
            Team::Mercedes => "Mercedes",
            Team::Ferrari => "Ferrari",
            Team::RedBull => "Red Bull",
            Team::Williams => "Williams",
            Team::RacingPoint => "Racing Point",
            Team::Renault => "Renault",
            Team::AlphaTauri => "Alpha Tauri",
            Team::Haas => "Haas",
            Team::McLaren => "McLaren",
            Team::AlfaRomeo => "Alfa Romeo",
            Team::Classic => "Car",
        }
    }
}

impl From<u8> for Team {
    fn from(id: u8) -> Self {
        match id {
            0 => Team::Mercedes,
            1 => Team::Ferrari,
            2 => Team::RedBull,
            3 => Team::Williams,
            4 => Team::RacingPoint,
            5 => Team::Renault,
            6 => Team::AlphaTauri,
            7 => Team::Haas,
            8 => Team::McLaren,
            9 => Team::AlfaRomeo,
            _ => Team::Classic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_era_ids_map_to_teams() {
        assert_eq!(Team::from(0), Team::Mercedes);
        assert_eq!(Team::from(9), Team::AlfaRomeo);
    }

    #[test]
    fn everything_else_is_classic() {
        assert_eq!(Team::from(10), Team::Classic);
        assert_eq!(Team::from(255), Team::Classic);
        assert_eq!(Team::Classic.display_name(), "Car");
    }
}
