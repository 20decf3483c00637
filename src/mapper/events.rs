//! Event interpretation: raw 4-character codes to typed session events.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::model::{EventKind, PenaltyRecord, SessionEvent, SessionModel};
use crate::packets::{EventDetail, EventPacket, NUM_CARS, PacketDecoder, PacketHeader};
use crate::types::{Infringement, PenaltyKind};

/// Identity of a delivered event, used to suppress duplicate application when
/// the same datagram bytes are processed twice (UDP can replay).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EventFingerprint {
    session_uid: u64,
    frame_identifier: u32,
    session_time_bits: u32,
    code: [u8; 4],
    detail: [u8; 7],
}

impl EventFingerprint {
    fn of(header: &PacketHeader, event: &EventPacket) -> Self {
        Self {
            session_uid: header.session_uid,
            frame_identifier: header.frame_identifier,
            session_time_bits: header.session_time.to_bits(),
            code: event.code,
            detail: event.detail_bytes,
        }
    }
}

/// Drain all queued events from the decoder into the model, in arrival order.
pub(crate) fn drain_events(
    decoder: &mut PacketDecoder,
    model: &mut SessionModel,
    last_delivered: &mut Option<EventFingerprint>,
    now: Instant,
) {
    while let Some((header, event)) = decoder.pop_event() {
        let fingerprint = EventFingerprint::of(&header, &event);
        if last_delivered.as_ref() == Some(&fingerprint) {
            debug!(code = ?std::str::from_utf8(&event.code), "suppressing duplicate event delivery");
            continue;
        }
        apply_event(decoder, model, &event, now);
        *last_delivered = Some(fingerprint);
    }
}

fn apply_event(decoder: &mut PacketDecoder, model: &mut SessionModel, event: &EventPacket, now: Instant) {
    match &event.code {
        b"SSTA" => {
            info!("session started, resetting model");
            model.reset();
            decoder.reset_retained_state();
            model.events.push(SessionEvent::new(EventKind::SessionStarted, 0));
        }
        b"SEND" => {
            model.events.push(SessionEvent::new(EventKind::SessionEnded, 0));
            model.session.session_finished = true;
        }
        b"FTLP" => {
            if let EventDetail::FastestLap { vehicle_idx, lap_time } = event.detail {
                model.events.push(SessionEvent::new(EventKind::FastestLap { lap_time }, vehicle_idx));
            }
        }
        b"RTMT" => {
            if let EventDetail::Retirement { vehicle_idx } = event.detail {
                model.events.push(SessionEvent::new(EventKind::Retirement, vehicle_idx));
            }
        }
        b"DRSE" => model.events.push(SessionEvent::new(EventKind::DrsEnabled, 0)),
        b"DRSD" => model.events.push(SessionEvent::new(EventKind::DrsDisabled, 0)),
        b"TMPT" => {
            if let EventDetail::TeamMateInPits { vehicle_idx } = event.detail {
                model.events.push(SessionEvent::new(EventKind::TeamMateInPits, vehicle_idx));
            }
        }
        b"CHQF" => model.events.push(SessionEvent::new(EventKind::ChequeredFlag, 0)),
        b"RCWN" => {
            if let EventDetail::RaceWinner { vehicle_idx } = event.detail {
                model.events.push(SessionEvent::new(EventKind::RaceWinner, vehicle_idx));
            }
        }
        b"PENA" => apply_penalty(model, event, now),
        b"SPTP" => {
            if let EventDetail::SpeedTrap { vehicle_idx, speed } = event.detail {
                model.events.push(SessionEvent::new(EventKind::SpeedTrap { speed }, vehicle_idx));
            }
        }
        other => {
            warn!(code = ?std::str::from_utf8(other), "ignoring unrecognised event code");
        }
    }
}

fn apply_penalty(model: &mut SessionModel, event: &EventPacket, now: Instant) {
    let EventDetail::Penalty {
        penalty_type,
        infringement_type,
        vehicle_idx,
        other_vehicle_idx,
        time,
        lap_num,
        places_gained,
    } = event.detail
    else {
        return;
    };

    let kind = PenaltyKind::from(penalty_type);
    let infringement = Infringement::from(infringement_type);
    debug!(?kind, ?infringement, car = vehicle_idx, lap = lap_num, "penalty issued");

    model.events.push(SessionEvent::new(
        EventKind::PenaltyIssued {
            kind,
            infringement,
            lap_num,
            other_vehicle_idx,
            time_gained: time,
            places_gained,
        },
        vehicle_idx,
    ));
    let event_index = model.events.len() - 1;

    let Some(driver) = model.drivers.get_mut(usize::from(vehicle_idx)) else {
        warn!(car = vehicle_idx, max = NUM_CARS, "penalty for out-of-range vehicle index");
        return;
    };

    // File the incident on its lap; lap number 0 (pre-race) goes to lap 1.
    let lap_idx = usize::from(lap_num.saturating_sub(1)).min(driver.laps.len() - 1);
    driver.laps[lap_idx].incidents.push(event_index);

    if kind.is_pit_relevant() {
        driver.pit_penalties.push(PenaltyRecord {
            event_index,
            kind,
            infringement,
            lap_num,
            served: false,
            issued_at: now,
        });
    }
}
