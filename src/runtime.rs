//! Background driver task: socket in, model snapshots out.

use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::config::TelemetryConfig;
use crate::connection::UdpTelemetrySource;
use crate::mapper::SessionMapper;
use crate::model::SessionModel;
use crate::Result;

/// Channels handed out by [`TelemetryDriver::spawn`].
pub struct DriverChannels {
    /// Receiver for model snapshots; one per applied datagram.
    pub snapshots: watch::Receiver<Option<Arc<SessionModel>>>,
    /// Cancellation token for graceful shutdown.
    pub cancel: CancellationToken,
}

/// Spawns and manages the telemetry processing task.
///
/// The task owns the socket and the mapper. After every applied datagram it
/// publishes a cloned snapshot of the model through a watch channel, so
/// observers can read a consistent state at their own pace and never block
/// the receive loop.
pub struct TelemetryDriver;

impl TelemetryDriver {
    const MAX_CONSECUTIVE_ERRORS: u32 = 10;

    /// Bind the socket and spawn the processing task.
    pub async fn spawn(config: TelemetryConfig) -> Result<DriverChannels> {
        let source = UdpTelemetrySource::bind(&config).await?;
        let mapper = SessionMapper::with_config(&config);

        let (snapshot_tx, snapshot_rx) = watch::channel(None);
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();

        tokio::spawn(async move {
            Self::receive_loop(source, mapper, snapshot_tx, cancel_task).await;
        });

        Ok(DriverChannels { snapshots: snapshot_rx, cancel })
    }

    async fn receive_loop(
        mut source: UdpTelemetrySource,
        mut mapper: SessionMapper,
        snapshot_tx: watch::Sender<Option<Arc<SessionModel>>>,
        cancel: CancellationToken,
    ) {
        info!("telemetry receive loop started");
        let mut datagram_count = 0u64;
        let mut error_count = 0u32;

        loop {
            let applied = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("telemetry receive loop cancelled");
                    break;
                }
                result = source.recv_apply(&mut mapper) => result,
            };

            match applied {
                Ok(true) => {
                    datagram_count += 1;
                    error_count = 0;
                    if snapshot_tx.send(Some(Arc::new(mapper.model().clone()))).is_err() {
                        debug!("snapshot receiver dropped, shutting down");
                        break;
                    }
                }
                Ok(false) => {
                    // Dropped datagram; the model is unchanged, nothing to publish.
                    error_count = 0;
                }
                Err(e) => {
                    error_count += 1;
                    error!(error = %e, attempt = error_count, "socket receive failed");
                    if !e.is_retryable() || error_count >= Self::MAX_CONSECUTIVE_ERRORS {
                        error!("giving up on telemetry socket");
                        let _ = snapshot_tx.send(None);
                        break;
                    }
                    let backoff = std::time::Duration::from_millis(50 * (1 << error_count.min(5)));
                    tokio::time::sleep(backoff).await;
                }
            }
        }

        info!(datagrams = datagram_count, "telemetry receive loop ended");
    }
}
