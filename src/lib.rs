//! Type-safe session model for the F1 2020 UDP telemetry protocol.
//!
//! Paddock listens to the binary UDP stream the game emits, decodes its
//! packet family and maintains a continuously updated model of the running
//! session: per-driver lap timing, time deltas against the player and the
//! leader, tire and damage state, pit-stop and penalty bookkeeping, the
//! session event log and the final classification.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use futures::{pin_mut, StreamExt};
//! use paddock::{Paddock, TelemetryConfig};
//!
//! #[tokio::main]
//! async fn main() -> paddock::Result<()> {
//!     let session = Paddock::connect(TelemetryConfig::default()).await?;
//!     let updates = session.updates();
//!     pin_mut!(updates);
//!
//!     while let Some(model) = updates.next().await {
//!         if let Some(leader) = model.drivers.iter().find(|d| d.position == 1) {
//!             println!("P1: {} (lap {})", leader.name, leader.lap_nr);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Driving the loop yourself
//!
//! UIs that own their frame loop can poll instead of subscribing:
//!
//! ```rust,no_run
//! use paddock::{SessionMapper, TelemetryConfig, UdpTelemetrySource};
//!
//! # async fn tick() -> paddock::Result<()> {
//! let config = TelemetryConfig::default();
//! let mut source = UdpTelemetrySource::bind(&config).await?;
//! let mut mapper = SessionMapper::with_config(&config);
//!
//! // once per frame:
//! while source.poll_apply(&mut mapper) {}
//! let model = mapper.model();
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! UDP datagram ─► PacketDecoder ─► SessionMapper ─► SessionModel
//!                 (framing,         (events, lap      (snapshot
//!                  typed packets)    reconstruction,    published per
//!                                    deltas, pit FSM)   datagram)
//! ```
//!
//! A datagram is always applied as a whole before a snapshot is published,
//! so observers never see a half-applied update.

pub mod config;
mod error;
pub mod mapper;
pub mod model;
pub mod packets;
pub mod runtime;
pub mod types;

pub mod connection;

pub use config::{DEFAULT_PORT, TelemetryConfig};
pub use connection::{LiveSession, UdpTelemetrySource};
pub use error::{Result, TelemetryError};
pub use mapper::{DriverNameMapping, MAX_DATAGRAM_BYTES, SessionMapper};
pub use model::{
    ClassificationEntry, Driver, EventKind, Lap, PenaltyRecord, SessionEvent, SessionInfo,
    SessionModel, WearDetail,
};
pub use runtime::{DriverChannels, TelemetryDriver};
pub use types::{
    DriverStatus, Infringement, PenaltyKind, SessionType, Team, Track, TyreCompound,
    VisualCompound,
};

/// Unified entry point.
///
/// ```rust,no_run
/// use paddock::{Paddock, TelemetryConfig};
///
/// # #[tokio::main]
/// # async fn main() -> paddock::Result<()> {
/// let session = Paddock::connect(TelemetryConfig::default()).await?;
/// if let Some(model) = session.snapshot() {
///     println!("{} drivers on the list", model.count_drivers);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Paddock;

impl Paddock {
    /// Bind the configured UDP socket and start the background session.
    pub async fn connect(config: TelemetryConfig) -> Result<LiveSession> {
        LiveSession::connect(config).await
    }
}
