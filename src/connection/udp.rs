//! UDP socket source for the telemetry feed.

use tokio::net::UdpSocket;
use tracing::{info, warn};

use crate::config::TelemetryConfig;
use crate::mapper::{MAX_DATAGRAM_BYTES, SessionMapper};
use crate::{Result, TelemetryError};

/// Bound UDP socket plus receive buffer.
///
/// Two consumption styles are supported: a non-blocking [`poll_apply`] tick
/// for callers that drive their own loop (a UI frame callback, typically),
/// and an async [`recv_apply`] for the background driver task.
///
/// [`poll_apply`]: UdpTelemetrySource::poll_apply
/// [`recv_apply`]: UdpTelemetrySource::recv_apply
pub struct UdpTelemetrySource {
    socket: UdpSocket,
    // One byte of headroom so an oversize datagram is detectable rather than
    // silently truncated at the limit.
    buf: Box<[u8]>,
}

impl UdpTelemetrySource {
    /// Bind the configured address.
    pub async fn bind(config: &TelemetryConfig) -> Result<Self> {
        let addr = config.bind_addr();
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| TelemetryError::bind_failed(addr.to_string(), e))?;
        info!(%addr, "telemetry socket bound");
        Ok(Self { socket, buf: vec![0u8; MAX_DATAGRAM_BYTES + 1].into_boxed_slice() })
    }

    /// Non-blocking tick: apply at most one pending datagram.
    ///
    /// Returns `true` when a datagram was received and applied, `false` when
    /// nothing was pending or the datagram had to be dropped. Never blocks,
    /// so a UI loop can call this every frame.
    pub fn poll_apply(&mut self, mapper: &mut SessionMapper) -> bool {
        let len = match self.socket.try_recv_from(&mut self.buf) {
            Ok((len, _peer)) => len,
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => return false,
            Err(e) => {
                warn!(error = %e, "transient socket error, datagram skipped");
                return false;
            }
        };
        self.apply(mapper, len)
    }

    /// Await one datagram and apply it.
    pub async fn recv_apply(&mut self, mapper: &mut SessionMapper) -> Result<bool> {
        let (len, _peer) = self
            .socket
            .recv_from(&mut self.buf)
            .await
            .map_err(|e| TelemetryError::socket_error("recv", e))?;
        Ok(self.apply(mapper, len))
    }

    fn apply(&mut self, mapper: &mut SessionMapper, len: usize) -> bool {
        match mapper.apply_datagram(&self.buf[..len]) {
            Ok(()) => true,
            Err(e) => {
                // Lossy feed: a bad datagram is dropped, the model stays as it
                // was and the next datagram will supersede it anyway.
                warn!(error = %e, len, "datagram dropped");
                false
            }
        }
    }

    /// Local address the socket is bound to.
    pub fn local_addr(&self) -> Result<std::net::SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| TelemetryError::socket_error("local_addr", e))
    }
}
