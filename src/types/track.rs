//! Track identifiers for the 2020 season calendar.

use serde::{Deserialize, Serialize};

/// Circuit reported by the Session packet's track id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Track {
    #[default]
    Melbourne,
    PaulRicard,
    Shanghai,
    Sakhir,
    Catalunya,
    Monaco,
    Montreal,
    Silverstone,
    Hockenheim,
    Hungaroring,
    Spa,
    Monza,
    Singapore,
    Suzuka,
    AbuDhabi,
    Texas,
    Brazil,
    Austria,
    Sochi,
    Mexico,
    Baku,
    SakhirShort,
    SilverstoneShort,
    TexasShort,
    SuzukaShort,
    Hanoi,
    Zandvoort,
    Unknown(i8),
}

impl From<i8> for Track {
    fn from(id: i8) -> Self {
        match id {
            0 => Track::Melbourne,
            1 => Track::PaulRicard,
            2 => Track::Shanghai,
            3 => Track::Sakhir,
            4 => Track::Catalunya,
            5 => Track::Monaco,
            6 => Track::Montreal,
            7 => Track::Silverstone,
            8 => Track::Hockenheim,
            9 => Track::Hungaroring,
            10 => Track::Spa,
            11 => Track::Monza,
            12 => Track::Singapore,
            13 => Track::Suzuka,
            14 => Track::AbuDhabi,
            15 => Track::Texas,
            16 => Track::Brazil,
            17 => Track::Austria,
            18 => Track::Sochi,
            19 => Track::Mexico,
            20 => Track::Baku,
            21 => Track::SakhirShort,
            22 => Track::SilverstoneShort,
            23 => Track::TexasShort,
            24 => Track::SuzukaShort,
            25 => Track::Hanoi,
            26 => Track::Zandvoort,
            other => Track::Unknown(other),
        }
    }
}
