//! The background reporter: polls the host on a fixed tick and pushes
//! presence updates.
//!
//! One worker thread owns all host reads and snapshot state; the only
//! shared mutable state is the stop flag and the reporting toggle, both
//! SeqCst atomics. Cancellation is cooperative and takes effect at the
//! next sleep-wake boundary, so shutdown latency is bounded by one tick
//! interval.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use scopelink_config::ReporterConfig;
use scopelink_host::HostApis;
use scopelink_presence::PresenceSink;
use tracing::{debug, error, info};

use super::captions::caption_index;
use super::payload::build_payload;
use super::snapshot::{self, SessionSnapshot};

// ---------------------------------------------------------------------------
// Worker state
// ---------------------------------------------------------------------------

/// State owned by the worker thread; never shared.
struct ReporterState {
    apis: HostApis,
    sink: Arc<dyn PresenceSink>,
    config: ReporterConfig,
    enabled: Arc<AtomicBool>,
    started_at: Instant,
    start_epoch: u64,
    tracked: HashSet<String>,
    snapshot: SessionSnapshot,
}

impl ReporterState {
    fn on_tick(&mut self, counter: u64) {
        if counter % u64::from(self.config.snapshot_every.max(1)) == 0 {
            self.snapshot = snapshot::refresh(
                &self.apis,
                &mut self.tracked,
                self.started_at.elapsed(),
                &self.config,
            );
            debug!(role = ?self.snapshot.role, owned = self.snapshot.owned_aircraft, "snapshot refreshed");
        }

        if !self.enabled.load(Ordering::SeqCst) {
            self.sink.clear();
            return;
        }

        let idx = caption_index(
            counter,
            self.config.caption_every,
            self.config.idle_captions.len(),
        );
        let caption = self
            .config
            .idle_captions
            .get(idx)
            .map(String::as_str)
            .unwrap_or("");
        self.sink
            .publish(build_payload(&self.snapshot, caption, self.start_epoch));
    }
}

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

/// Owns the polling worker thread for the lifetime of the plugin.
pub struct PresenceReporter {
    apis: HostApis,
    sink: Arc<dyn PresenceSink>,
    config: ReporterConfig,
    enabled: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    started_at: Instant,
    start_epoch: u64,
    worker: Option<JoinHandle<()>>,
}

impl PresenceReporter {
    pub fn new(
        apis: HostApis,
        sink: Arc<dyn PresenceSink>,
        config: ReporterConfig,
        enabled: Arc<AtomicBool>,
        start_epoch: u64,
    ) -> Self {
        Self {
            apis,
            sink,
            config,
            enabled,
            stop: Arc::new(AtomicBool::new(false)),
            started_at: Instant::now(),
            start_epoch,
            worker: None,
        }
    }

    /// Spawn the polling loop. A second call while running is a no-op.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            debug!("reporter already running, ignoring start");
            return;
        }

        self.stop.store(false, Ordering::SeqCst);
        let stop = Arc::clone(&self.stop);
        let interval = Duration::from_millis(self.config.tick_interval_ms);
        let mut state = ReporterState {
            apis: self.apis.clone(),
            sink: Arc::clone(&self.sink),
            config: self.config.clone(),
            enabled: Arc::clone(&self.enabled),
            started_at: self.started_at,
            start_epoch: self.start_epoch,
            tracked: HashSet::new(),
            snapshot: SessionSnapshot::default(),
        };

        let spawned = std::thread::Builder::new()
            .name("presence-reporter".into())
            .spawn(move || {
                let mut counter: u64 = 0;
                loop {
                    std::thread::sleep(interval);
                    if stop.load(Ordering::SeqCst) {
                        return;
                    }
                    state.on_tick(counter);
                    counter += 1;
                }
            });

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                info!("presence reporter started ({} ms tick)", interval.as_millis());
            }
            Err(e) => error!("failed to spawn presence reporter: {e}"),
        }
    }

    /// Request loop exit and join the worker.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("presence reporter worker panicked");
            } else {
                info!("presence reporter stopped");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

// =============================================================================
// TESTS
// =============================================================================
