use std::panic::AssertUnwindSafe;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use futures_util::FutureExt;
use results_core::RequestId;
use results_logging::{results_error, results_warn};

use crate::fetch::{ClientSettings, ReqwestSearchApi, SearchApi};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
}

/// Runs fetches on a background tokio runtime. Requests are not cancelled:
/// every accepted command produces exactly one `FetchCompleted` event, in
/// completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let api = ReqwestSearchApi::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn SearchApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    results_error!("Failed to start fetch runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a fetch. Fails with `FailureKind::WorkerStopped` when the
    /// background worker is gone and nothing would ever answer.
    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) -> Result<(), FetchError> {
        self.cmd_tx
            .send(EngineCommand::Fetch {
                request_id,
                url: url.into(),
            })
            .map_err(|_| {
                results_warn!("Fetch worker is gone; request {} dropped", request_id);
                worker_stopped()
            })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event. `Ok(None)` means nothing
    /// arrived yet; an error means no event can ever arrive.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, FetchError> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(worker_stopped()),
        }
    }
}

fn worker_stopped() -> FetchError {
    FetchError::new(FailureKind::WorkerStopped, "fetch worker stopped")
}

async fn handle_command(
    api: &dyn SearchApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, url } => {
            let result = AssertUnwindSafe(api.search(&url))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    results_error!("Fetch for request {} panicked", request_id);
                    Err(FetchError::new(FailureKind::WorkerStopped, "fetch task panicked"))
                });
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use super::EngineHandle;
    use crate::FailureKind;

    fn stopped_handle() -> EngineHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        drop(event_tx);
        EngineHandle { cmd_tx, event_rx }
    }

    #[test]
    fn fetch_reports_stopped_worker() {
        let engine = stopped_handle();
        let err = engine.fetch(1, "http://host/api/search?q=a&page=1").unwrap_err();
        assert_eq!(err.kind, FailureKind::WorkerStopped);
    }

    #[test]
    fn recv_reports_stopped_worker_immediately() {
        let engine = stopped_handle();
        let err = engine.recv_timeout(Duration::from_secs(30)).unwrap_err();
        assert_eq!(err.kind, FailureKind::WorkerStopped);
    }
}
