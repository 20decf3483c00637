//! The stateful stream processor: datagrams in, session model out.
//!
//! [`SessionMapper`] owns the packet decoder and the session model. A
//! datagram is applied as a whole: every packet in it is decoded and followed
//! by a full update cycle (events, then drivers, then classification)
//! before the call returns, so observers never see a half-applied datagram.

mod classification;
mod delta;
mod drivers;
mod events;
mod names;
mod pit;
mod synthetic;

pub use names::DriverNameMapping;

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::TelemetryConfig;
use crate::model::SessionModel;
use crate::packets::{NUM_CARS, PacketDecoder};
use crate::{Result, TelemetryError};

/// Largest accepted datagram. The game's biggest packet is well under 2 KiB;
/// anything near this bound is garbage and is rejected outright.
pub const MAX_DATAGRAM_BYTES: usize = 64 * 1024;

/// Stateful processor translating the raw packet stream into the session
/// model.
pub struct SessionMapper {
    decoder: PacketDecoder,
    model: SessionModel,
    mappings: Vec<DriverNameMapping>,
    speeding_serve_delay: Duration,
    last_event: Option<events::EventFingerprint>,
}

impl Default for SessionMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMapper {
    pub fn new() -> Self {
        Self::with_config(&TelemetryConfig::default())
    }

    pub fn with_config(config: &TelemetryConfig) -> Self {
        let mut mapper = Self {
            decoder: PacketDecoder::new(),
            model: SessionModel::new(),
            mappings: config.name_mappings.clone(),
            speeding_serve_delay: config.speeding_serve_delay,
            last_event: None,
        };
        if config.synthetic_grid {
            mapper.insert_synthetic_grid();
        }
        mapper
    }

    /// The current session model.
    pub fn model(&self) -> &SessionModel {
        &self.model
    }

    /// Apply one received datagram.
    ///
    /// A datagram may carry several packets back to back; each is decoded and
    /// applied in order. An unframeable datagram (unknown packet id, or a
    /// packet size past the buffer end) is rejected as a whole. By the time
    /// the error surfaces, any packets before the bad one have been applied,
    /// which is safe because packet application is idempotent.
    pub fn apply_datagram(&mut self, datagram: &[u8]) -> Result<()> {
        if datagram.len() > MAX_DATAGRAM_BYTES {
            return Err(TelemetryError::oversize_datagram(datagram.len(), MAX_DATAGRAM_BYTES));
        }
        let now = Instant::now();
        let mut offset = 0;
        while offset < datagram.len() {
            offset += self.decoder.decode_packet(&datagram[offset..])?;
            self.update_cycle(now);
        }
        Ok(())
    }

    /// Replace the name-mapping table and recompute every driver's name.
    pub fn set_name_mappings(&mut self, mappings: Vec<DriverNameMapping>) {
        debug!(mappings = mappings.len(), "name mappings replaced");
        self.mappings = mappings;
        for i in 0..NUM_CARS {
            if let Some(participant) = self.decoder.participants.participants.get(i) {
                names::update_driver_name(&mut self.model.drivers[i], participant, &self.mappings);
            }
        }
    }

    /// Populate the model with the deterministic demo grid.
    pub fn insert_synthetic_grid(&mut self) {
        synthetic::insert_grid(&mut self.model);
    }

    fn update_cycle(&mut self, now: Instant) {
        events::drain_events(&mut self.decoder, &mut self.model, &mut self.last_event, now);
        drivers::update_drivers(
            &self.decoder,
            &mut self.model,
            &self.mappings,
            self.speeding_serve_delay,
            now,
        );
        classification::capture_classification(&mut self.decoder, &mut self.model);
    }
}
