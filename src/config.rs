//! Runtime configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::mapper::DriverNameMapping;

/// Default UDP port of the F1 2020 telemetry feed.
pub const DEFAULT_PORT: u16 = 20777;

/// Configuration for a telemetry session.
///
/// ```rust
/// use paddock::TelemetryConfig;
///
/// let config = TelemetryConfig::default().with_port(20888);
/// assert_eq!(config.bind_addr().port(), 20888);
/// ```
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Address the UDP socket binds to.
    pub bind_address: IpAddr,
    /// Port the game sends telemetry to.
    pub port: u16,
    /// How old a pit-lane-speeding penalty must be before a pit stop counts
    /// as serving it. The game refuses immediate serves; 60 seconds matches
    /// its observed behavior.
    pub speeding_serve_delay: Duration,
    /// External display-name overrides.
    pub name_mappings: Vec<DriverNameMapping>,
    /// Populate the model with a deterministic demo grid at startup, for UI
    /// work without the game running.
    pub synthetic_grid: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            speeding_serve_delay: Duration::from_secs(60),
            name_mappings: Vec::new(),
            synthetic_grid: false,
        }
    }
}

impl TelemetryConfig {
    /// Override the UDP port (useful in tests).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Attach display-name overrides.
    pub fn with_name_mappings(mut self, mappings: Vec<DriverNameMapping>) -> Self {
        self.name_mappings = mappings;
        self
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
