//! Display-name resolution.
//!
//! Precedence: external mapping (team + number, then number only), the
//! telemetry name when it is a real driver name, otherwise a synthesised
//! "Team (number)" label. Network players always fall through to the label:
//! the game reports them with a generic name.

use serde::{Deserialize, Serialize};

use crate::model::Driver;
use crate::packets::ParticipantEntry;
use crate::types::Team;

/// Driver ids below this are offline/AI drivers with real telemetry names.
const FIRST_NETWORK_DRIVER_ID: u8 = 100;

/// External display-name override, matched on race number and optionally the
/// team (a number alone is ambiguous across leagues sharing a lobby).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverNameMapping {
    pub driver_number: u8,
    pub team: Option<Team>,
    pub display_name: String,
}

/// Recompute one driver's display name from the current participant data.
///
/// The lookup over `mappings` is strictly two-pass: all team-qualified
/// entries are tried before any number-only entry, never interleaved.
pub(crate) fn update_driver_name(
    driver: &mut Driver,
    participant: &ParticipantEntry,
    mappings: &[DriverNameMapping],
) {
    if !participant.has_data() {
        return;
    }

    driver.telemetry_name.clear();
    driver.telemetry_name.push_str(&participant.name);

    let team = Team::from(participant.team_id);

    for mapping in mappings {
        if mapping.team == Some(team) && mapping.driver_number == participant.race_number {
            driver.mapped_name.clone_from(&mapping.display_name);
            driver.name.clone_from(&mapping.display_name);
            return;
        }
    }
    for mapping in mappings {
        if mapping.team.is_none() && mapping.driver_number == participant.race_number {
            driver.mapped_name.clone_from(&mapping.display_name);
            driver.name.clone_from(&mapping.display_name);
            return;
        }
    }
    driver.mapped_name.clear();

    if participant.driver_id < FIRST_NETWORK_DRIVER_ID {
        driver.name.clone_from(&driver.telemetry_name);
    } else {
        driver.name = format!("{} ({})", team.display_name(), participant.race_number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(driver_id: u8, team_id: u8, race_number: u8, name: &str) -> ParticipantEntry {
        ParticipantEntry {
            driver_id,
            team_id,
            race_number,
            name: name.to_string(),
            ..ParticipantEntry::default()
        }
    }

    #[test]
    fn no_participant_data_leaves_name_untouched() {
        let mut driver = Driver::default();
        update_driver_name(&mut driver, &participant(5, 0, 0, "ghost"), &[]);
        assert!(driver.name.is_empty());
        assert!(driver.telemetry_name.is_empty());
    }

    #[test]
    fn real_driver_uses_telemetry_name() {
        let mut driver = Driver::default();
        update_driver_name(&mut driver, &participant(9, 0, 44, "Lewis Hamilton"), &[]);
        assert_eq!(driver.name, "Lewis Hamilton");
        assert_eq!(driver.telemetry_name, "Lewis Hamilton");
    }

    #[test]
    fn network_player_gets_team_and_number() {
        let mut driver = Driver::default();
        update_driver_name(&mut driver, &participant(120, 2, 33, "Player"), &[]);
        assert_eq!(driver.name, "Red Bull (33)");
        assert_eq!(driver.telemetry_name, "Player");
    }

    #[test]
    fn unknown_team_synthesises_generic_car_label() {
        let mut driver = Driver::default();
        update_driver_name(&mut driver, &participant(120, 30, 7, "Player"), &[]);
        assert_eq!(driver.name, "Car (7)");
    }

    #[test]
    fn team_qualified_mapping_wins_over_number_only() {
        let mappings = vec![
            DriverNameMapping {
                driver_number: 33,
                team: None,
                display_name: "Generic 33".into(),
            },
            DriverNameMapping {
                driver_number: 33,
                team: Some(Team::RedBull),
                display_name: "Max".into(),
            },
        ];
        let mut driver = Driver::default();
        update_driver_name(&mut driver, &participant(120, 2, 33, "Player"), &mappings);
        assert_eq!(driver.name, "Max");
        assert_eq!(driver.mapped_name, "Max");
    }

    #[test]
    fn number_only_mapping_applies_when_team_does_not_match() {
        let mappings = vec![DriverNameMapping {
            driver_number: 33,
            team: Some(Team::Ferrari),
            display_name: "Wrong".into(),
        }];
        let mut driver = Driver::default();
        update_driver_name(&mut driver, &participant(120, 2, 33, "Player"), &mappings);
        // no match: team-qualified entry is for another team
        assert_eq!(driver.name, "Red Bull (33)");
        assert!(driver.mapped_name.is_empty());
    }
}
