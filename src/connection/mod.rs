//! Inbound UDP boundary.

mod live;
mod udp;

pub use live::LiveSession;
pub use udp::UdpTelemetrySource;
