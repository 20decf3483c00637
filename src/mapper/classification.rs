//! One-shot capture of the final classification.

use tracing::info;

use crate::model::{ClassificationEntry, SessionModel};
use crate::packets::{NUM_CARS, PacketDecoder};

/// Move a pending classification packet into the model.
///
/// The decoder hands the packet over by value, so a classification is applied
/// at most once; if the model already holds one (the game occasionally
/// re-sends), the newcomer is dropped.
pub(crate) fn capture_classification(decoder: &mut PacketDecoder, model: &mut SessionModel) {
    let Some(packet) = decoder.take_classification() else { return };
    if model.classification.is_some() || packet.num_cars == 0 {
        return;
    }

    let count = usize::from(packet.num_cars).min(NUM_CARS);
    let entries = packet.cars[..count]
        .iter()
        .enumerate()
        .map(|(i, car)| ClassificationEntry {
            driver_index: i,
            position: car.position,
            grid_position: car.grid_position,
            num_laps: car.num_laps,
            points: car.points,
            best_lap_time: car.best_lap_time,
            total_race_time: car.total_race_time,
            penalties_time: car.penalties_time,
            num_penalties: car.num_penalties,
        })
        .collect();

    info!(cars = count, "final classification captured");
    model.classification = Some(entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testutil::{ClassifiedCar, classification_packet_bytes};

    #[test]
    fn captures_once_and_links_drivers() {
        let mut decoder = PacketDecoder::new();
        let mut model = SessionModel::new();
        let raw = classification_packet_bytes(
            2,
            &[
                ClassifiedCar { index: 0, position: 2, points: 18, ..ClassifiedCar::default() },
                ClassifiedCar { index: 1, position: 1, points: 25, ..ClassifiedCar::default() },
            ],
        );
        decoder.decode_packet(&raw).unwrap();
        capture_classification(&mut decoder, &mut model);

        let classification = model.classification.as_ref().unwrap();
        assert_eq!(classification.len(), 2);
        assert_eq!(classification[0].driver_index, 0);
        assert_eq!(classification[0].position, 2);
        assert_eq!(classification[1].points, 25);

        // a second packet does not replace the captured result
        let raw2 = classification_packet_bytes(
            1,
            &[ClassifiedCar { index: 0, position: 9, ..ClassifiedCar::default() }],
        );
        decoder.decode_packet(&raw2).unwrap();
        capture_classification(&mut decoder, &mut model);
        assert_eq!(model.classification.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn empty_classification_is_ignored() {
        let mut decoder = PacketDecoder::new();
        let mut model = SessionModel::new();
        decoder.decode_packet(&classification_packet_bytes(0, &[])).unwrap();
        capture_classification(&mut decoder, &mut model);
        assert!(model.classification.is_none());
    }
}
