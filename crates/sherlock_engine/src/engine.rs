use std::sync::{mpsc, Arc};
use std::thread;

use sherlock_core::SearchRequest;
use sherlock_logging::{sherlock_error, sherlock_warn};

use crate::client::{decode_found_sites, LookupClient, LookupSettings, ReqwestLookupClient};
use crate::EngineEvent;

enum EngineCommand {
    Submit { request: SearchRequest },
}

/// Runs lookups on a background thread with its own tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: LookupSettings) -> Self {
        Self::with_client(Arc::new(ReqwestLookupClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn LookupClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    sherlock_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request: SearchRequest) {
        if self.cmd_tx.send(EngineCommand::Submit { request }).is_err() {
            sherlock_warn!("Engine thread is gone; submission dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine thread has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    client: &dyn LookupClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { request } => {
            let result = client.submit(&request).await.and_then(decode_found_sites);
            let _ = event_tx.send(EngineEvent::LookupCompleted {
                username: request.username,
                result,
            });
        }
    }
}
