//! In-memory model of the running session.
//!
//! The [`SessionModel`] is a passive container: all mutation happens inside
//! the mapper during datagram application, under a single-writer discipline.
//! Observers receive cloned snapshots (the model is `Clone`), so a reader can
//! never see a half-applied datagram.

mod classification;
mod driver;
mod event;
mod session;

pub use classification::ClassificationEntry;
pub use driver::{Driver, Lap, MAX_LAPS, PenaltyRecord, WearDetail};
pub use event::{EventKind, SessionEvent};
pub use session::SessionInfo;

use crate::packets::NUM_CARS;

/// Complete observable state of the session.
#[derive(Debug, Clone)]
pub struct SessionModel {
    pub session: SessionInfo,
    /// Fixed car slots; the game's vehicle index is the array index.
    pub drivers: Vec<Driver>,
    /// High-water mark of active cars this session. Monotone so drivers who
    /// leave stay visible; reset on session start.
    pub count_drivers: u8,
    /// Append-only, append-ordered event log.
    pub events: Vec<SessionEvent>,
    /// Final classification; `Some` once captured, at most once per session.
    pub classification: Option<Vec<ClassificationEntry>>,
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionModel {
    pub fn new() -> Self {
        Self {
            session: SessionInfo::default(),
            drivers: (0..NUM_CARS).map(|_| Driver::default()).collect(),
            count_drivers: 0,
            events: Vec::new(),
            classification: None,
        }
    }

    /// Session-start reset: back to the post-construction state, with lap and
    /// driver allocations reused.
    pub fn reset(&mut self) {
        self.session.session_finished = false;
        self.session.current_lap = 1;
        self.count_drivers = 0;
        self.events.clear();
        self.classification = None;
        for driver in &mut self.drivers {
            driver.reset();
        }
    }

    /// The driver flagged as the local player, if any.
    pub fn player(&self) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.is_player)
    }

    /// Slot index of the race leader (position 1), if known.
    ///
    /// Presence is deliberately not required: in qualifying a car can retire
    /// after setting the lap that still leads the session.
    pub fn leader_index(&self) -> Option<usize> {
        self.drivers.iter().position(|d| d.position == 1)
    }
}
