//! Live session handle built on the background driver task.

use std::sync::Arc;

use futures::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::TelemetryConfig;
use crate::model::SessionModel;
use crate::runtime::TelemetryDriver;
use crate::Result;

/// Handle to a live telemetry session.
///
/// Obtained from [`Paddock::connect`](crate::Paddock::connect). Dropping the
/// handle stops the background task.
pub struct LiveSession {
    snapshots: watch::Receiver<Option<Arc<SessionModel>>>,
    cancel: CancellationToken,
}

impl LiveSession {
    /// Bind the socket and start processing in the background.
    pub async fn connect(config: TelemetryConfig) -> Result<Self> {
        let channels = TelemetryDriver::spawn(config).await?;
        Ok(Self { snapshots: channels.snapshots, cancel: channels.cancel })
    }

    /// Most recent model snapshot, if any datagram has been applied yet.
    pub fn snapshot(&self) -> Option<Arc<SessionModel>> {
        self.snapshots.borrow().clone()
    }

    /// Stream of model snapshots, one per applied datagram.
    ///
    /// The watch channel keeps only the latest value: a slow consumer sees
    /// the freshest state rather than a growing backlog.
    pub fn updates(&self) -> impl Stream<Item = Arc<SessionModel>> + 'static {
        use futures::StreamExt;
        WatchStream::new(self.snapshots.clone()).filter_map(|opt| async move { opt })
    }
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        debug!("dropping live session");
        self.cancel.cancel();
    }
}
