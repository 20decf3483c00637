//! Cross-cutting model invariants, exercised through the public API.

use proptest::prelude::*;

use paddock::packets::testutil::{
    LapCar, Participant, lap_packet_bytes, participants_packet_bytes, penalty_event_bytes,
    session_packet_bytes,
};
use paddock::{DriverStatus, SessionMapper};

fn active(index: usize, current_lap_num: u8) -> LapCar {
    LapCar {
        index,
        current_lap_num,
        result_status: 2,
        driver_status: 4,
        ..LapCar::default()
    }
}

#[test]
fn count_drivers_is_monotone() {
    let mut mapper = SessionMapper::new();
    let roster = [Participant { index: 0, driver_id: 9, team_id: 0, race_number: 44, name: "A" }];

    mapper.apply_datagram(&participants_packet_bytes(20, &roster)).unwrap();
    assert_eq!(mapper.model().count_drivers, 20);

    // Two drivers disconnect; the list must not shrink.
    mapper.apply_datagram(&participants_packet_bytes(18, &roster)).unwrap();
    assert_eq!(mapper.model().count_drivers, 20);

    mapper.apply_datagram(&participants_packet_bytes(22, &roster)).unwrap();
    assert_eq!(mapper.model().count_drivers, 22);
}

#[test]
fn at_most_one_driver_is_the_player() {
    let mut mapper = SessionMapper::new();

    // The header defaults to player index 0, then the real index arrives.
    mapper.apply_datagram(&lap_packet_bytes(0, &[active(0, 1)])).unwrap();
    assert!(mapper.model().drivers[0].is_player);

    mapper
        .apply_datagram(&lap_packet_bytes(5, &[active(0, 1), active(5, 1)]))
        .unwrap();
    let players: Vec<usize> = mapper
        .model()
        .drivers
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_player)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(players, vec![5]);
}

#[test]
fn spectator_mode_flags_no_player() {
    let mut mapper = SessionMapper::new();
    mapper.apply_datagram(&lap_packet_bytes(255, &[active(0, 2)])).unwrap();
    assert!(mapper.model().drivers.iter().all(|d| !d.is_player));
    assert_eq!(mapper.model().drivers[0].timedelta_to_player, 0.0);
}

#[test]
fn result_status_seven_maps_to_dnf() {
    let mut mapper = SessionMapper::new();
    let mut datagram = session_packet_bytes(17, 10, 10, 0);
    datagram.extend_from_slice(&participants_packet_bytes(
        2,
        &[Participant { index: 1, driver_id: 9, team_id: 0, race_number: 7, name: "Gone" }],
    ));
    mapper.apply_datagram(&datagram).unwrap();

    let mut crashed = active(1, 4);
    crashed.result_status = 7;
    mapper
        .apply_datagram(&lap_packet_bytes(0, &[active(0, 4), crashed]))
        .unwrap();

    assert_eq!(mapper.model().drivers[1].status, DriverStatus::Dnf);
    // not on the result list anymore
    assert!(!mapper.model().drivers[1].present);
}

#[test]
fn penalty_on_lap_zero_lands_on_the_first_lap() {
    let mut mapper = SessionMapper::new();
    mapper.apply_datagram(&penalty_event_bytes(1, 17, 4, 0)).unwrap();
    assert_eq!(mapper.model().drivers[4].laps[0].incidents.len(), 1);
}

#[test]
fn event_log_is_append_ordered() {
    use paddock::EventKind;
    use paddock::packets::testutil::event_packet_bytes;

    let mut mapper = SessionMapper::new();
    let mut drse = event_packet_bytes(b"DRSE", &[]);
    drse[18..22].copy_from_slice(&1u32.to_le_bytes());
    let mut drsd = event_packet_bytes(b"DRSD", &[]);
    drsd[18..22].copy_from_slice(&2u32.to_le_bytes());

    mapper.apply_datagram(&drse).unwrap();
    mapper.apply_datagram(&drsd).unwrap();

    assert!(matches!(mapper.model().events[0].kind, EventKind::DrsEnabled));
    assert!(matches!(mapper.model().events[1].kind, EventKind::DrsDisabled));
}

proptest! {
    /// Tire age always equals laps driven since the last tire change.
    #[test]
    fn tyre_age_tracks_laps_since_fitting(laps in proptest::collection::vec(1u8..60, 1..20)) {
        let mut mapper = SessionMapper::new();
        for lap in laps {
            mapper.apply_datagram(&lap_packet_bytes(0, &[active(0, lap)])).unwrap();
            let driver = &mapper.model().drivers[0];
            // no pit stop in this sequence: the tires are as old as the race
            prop_assert_eq!(driver.tyre_age, driver.lap_nr);
        }
    }

    /// Completed laps always satisfy the accumulation chain.
    #[test]
    fn accumulation_chain_holds(times in proptest::collection::vec(60.0f32..120.0, 2..15)) {
        let mut mapper = SessionMapper::new();
        mapper.apply_datagram(&lap_packet_bytes(0, &[active(0, 1)])).unwrap();
        for (i, lap_time) in times.iter().enumerate() {
            mapper
                .apply_datagram(&lap_packet_bytes(
                    0,
                    &[LapCar { last_lap_time: *lap_time, ..active(0, i as u8 + 2) }],
                ))
                .unwrap();
        }

        let driver = &mapper.model().drivers[0];
        let lap_nr = driver.lap_nr as usize;
        for n in 2..=lap_nr {
            let acc = driver.laps[n - 2].laps_accumulated;
            let expected = driver.laps[n - 2].lap
                + if n == 2 { 0.0 } else { driver.laps[n - 3].laps_accumulated };
            prop_assert!((acc - expected).abs() < 1e-3);
        }
    }

    /// Arbitrary garbage never panics the mapper; it is either applied or
    /// rejected with an error.
    #[test]
    fn random_datagrams_never_panic(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut mapper = SessionMapper::new();
        let _ = mapper.apply_datagram(&data);
    }

    /// A datagram that frames as a known packet but carries random content
    /// still leaves the model internally consistent.
    #[test]
    fn random_lap_content_keeps_player_unique(
        player_idx in 0u8..255,
        lap_nums in proptest::collection::vec(0u8..255, 1..6),
    ) {
        let mut mapper = SessionMapper::new();
        for lap in lap_nums {
            let _ = mapper.apply_datagram(&lap_packet_bytes(player_idx, &[active(3, lap)]));
            let players = mapper.model().drivers.iter().filter(|d| d.is_player).count();
            prop_assert!(players <= 1);
        }
    }
}
