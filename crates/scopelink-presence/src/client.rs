//! Presence client that forwards updates to the broadcasting service.

use std::sync::mpsc as std_mpsc;
use std::sync::Mutex;
use std::time::Duration;

use scopelink_common::PresenceError;
use tokio::sync::mpsc;
use tracing::warn;

use crate::protocol::ActivityPayload;
use crate::types::{PresenceClientConfig, PresenceEvent};

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// The external broadcasting SDK, behind a trait so the demo binary and
/// tests can stand in for it.
pub trait PresenceTransport: Send {
    fn connect(&mut self, client_id: &str) -> Result<(), PresenceError>;
    fn publish(&mut self, payload: &ActivityPayload) -> Result<(), PresenceError>;
    fn clear(&mut self) -> Result<(), PresenceError>;
    fn close(&mut self);
}

/// What the reporter needs from the presence side: fire-and-forget
/// publication. Calls never block the reporter thread.
pub trait PresenceSink: Send + Sync {
    fn publish(&self, payload: ActivityPayload);
    fn clear(&self);
}

enum PresenceCommand {
    Update(ActivityPayload),
    Clear,
    Shutdown,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Channel-backed presence client.
///
/// `start` spawns a single-worker runtime whose task connects the
/// transport, drains the command queue, and reports connection events
/// over the returned receiver.
pub struct PresenceClient {
    cmd_tx: mpsc::Sender<PresenceCommand>,
    runtime: Mutex<Option<tokio::runtime::Runtime>>,
}

impl PresenceClient {
    pub fn start(
        mut transport: Box<dyn PresenceTransport>,
        config: PresenceClientConfig,
    ) -> Result<(Self, std_mpsc::Receiver<PresenceEvent>), PresenceError> {
        let (event_tx, event_rx) = std_mpsc::channel();
        let (cmd_tx, mut cmd_rx) = mpsc::channel(config.queue_depth.max(1));

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| PresenceError::Connect(format!("failed to start runtime: {e}")))?;

        let client_id = config.client_id.clone();
        rt.spawn(async move {
            match transport.connect(&client_id) {
                Ok(()) => {
                    let _ = event_tx.send(PresenceEvent::Connected);
                }
                Err(e) => {
                    let _ = event_tx.send(PresenceEvent::Error(e.to_string()));
                }
            }

            while let Some(cmd) = cmd_rx.recv().await {
                let result = match cmd {
                    PresenceCommand::Update(payload) => transport.publish(&payload),
                    PresenceCommand::Clear => transport.clear(),
                    PresenceCommand::Shutdown => break,
                };
                if let Err(e) = result {
                    let _ = event_tx.send(PresenceEvent::Error(e.to_string()));
                }
            }

            transport.close();
            let _ = event_tx.send(PresenceEvent::Disconnected);
        });

        Ok((
            Self {
                cmd_tx,
                runtime: Mutex::new(Some(rt)),
            },
            event_rx,
        ))
    }

    /// Stop the worker task and shut the runtime down.
    ///
    /// Bounded: pending queue entries are abandoned after the timeout.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.try_send(PresenceCommand::Shutdown);
        if let Some(rt) = self.runtime.lock().unwrap().take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }
    }
}

impl PresenceSink for PresenceClient {
    fn publish(&self, payload: ActivityPayload) {
        if let Err(e) = self.cmd_tx.try_send(PresenceCommand::Update(payload)) {
            warn!(error = %e, "failed to queue presence update");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.cmd_tx.try_send(PresenceCommand::Clear) {
            warn!(error = %e, "failed to queue presence clear");
        }
    }
}

// ---------------------------------------------------------------------------
// Transports
// ---------------------------------------------------------------------------

/// Transport that logs updates instead of talking to a real service.
/// Used by the demo binary.
#[derive(Debug, Default)]
pub struct LogTransport;

impl PresenceTransport for LogTransport {
    fn connect(&mut self, client_id: &str) -> Result<(), PresenceError> {
        tracing::info!("presence transport ready (client id '{client_id}')");
        Ok(())
    }

    fn publish(&mut self, payload: &ActivityPayload) -> Result<(), PresenceError> {
        tracing::info!(state = %payload.state, details = %payload.details, "presence update");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PresenceError> {
        tracing::info!("presence cleared");
        Ok(())
    }

    fn close(&mut self) {
        tracing::info!("presence transport closed");
    }
}
