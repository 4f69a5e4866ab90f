//! ScopelinkPlugin struct definition and lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use scopelink_common::CommandId;
use scopelink_config::ScopelinkConfig;
use scopelink_host::{ClientMessage, HostApis};
use scopelink_presence::{PresenceEvent, PresenceSink};
use tracing::{error, info};

use super::commands;
use super::reporter::PresenceReporter;

pub(super) const PLUGIN_NAME: &str = "scopelink";
pub(super) const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identity reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMetadata {
    pub name: String,
    pub version: String,
    pub authors: String,
}

/// The plugin: wires host APIs, the reporter, and the command surface.
pub struct ScopelinkPlugin {
    apis: Option<HostApis>,
    sink: Option<Arc<dyn PresenceSink>>,
    reporter: Option<PresenceReporter>,
    enabled: Arc<AtomicBool>,
    command_ids: Vec<CommandId>,
    initialized: bool,
}

impl Default for ScopelinkPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopelinkPlugin {
    pub fn new() -> Self {
        Self {
            apis: None,
            sink: None,
            reporter: None,
            enabled: Arc::new(AtomicBool::new(true)),
            command_ids: Vec::new(),
            initialized: false,
        }
    }

    /// Capture the host API handles, register commands, start reporting.
    ///
    /// Command-registration failure leaves the plugin degraded but the
    /// reporter still runs.
    pub fn initialize(
        &mut self,
        config: &ScopelinkConfig,
        apis: HostApis,
        sink: Arc<dyn PresenceSink>,
    ) {
        let start_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        self.apis = Some(apis.clone());
        self.sink = Some(Arc::clone(&sink));
        self.enabled.store(config.presence.enabled, Ordering::SeqCst);

        self.display_message(&format!("Version {PLUGIN_VERSION} loaded."), "Initialisation");

        match commands::register_all(&apis.chat, Arc::clone(&self.enabled)) {
            Ok(ids) => {
                self.command_ids = ids;
                self.initialized = true;
            }
            Err(e) => error!("failed to initialize {PLUGIN_NAME}: {e}"),
        }

        let mut reporter = PresenceReporter::new(
            apis,
            sink,
            config.reporter.clone(),
            Arc::clone(&self.enabled),
            start_epoch,
        );
        reporter.start();
        self.reporter = Some(reporter);
    }

    /// Stop the reporter, clear presence, release the host handles.
    /// Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(mut reporter) = self.reporter.take() {
            reporter.stop();
        }
        if let Some(sink) = self.sink.take() {
            sink.clear();
        }
        if let Some(apis) = self.apis.take() {
            for id in self.command_ids.drain(..) {
                apis.chat.unregister_command(&id);
            }
        }
        if self.initialized {
            self.initialized = false;
            info!("{PLUGIN_NAME} shutdown complete");
        }
    }

    /// Send a message to the client chat window.
    pub fn display_message(&self, message: &str, sender: &str) {
        let Some(apis) = &self.apis else {
            return;
        };
        let text = if sender.is_empty() {
            message.to_string()
        } else {
            format!("{sender}: {message}")
        };
        apis.chat.send_client_message(ClientMessage {
            sender: PLUGIN_NAME.to_string(),
            text,
            dedicated_channel: true,
        });
    }

    /// Relay a presence client event into the chat window.
    pub fn announce_presence_event(&self, event: &PresenceEvent) {
        match event {
            PresenceEvent::Connected => {
                self.display_message("Connected to the presence service.", "")
            }
            PresenceEvent::Disconnected => {
                self.display_message("Disconnected from the presence service.", "")
            }
            PresenceEvent::Error(msg) => self.display_message(&format!("Presence error: {msg}"), ""),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: PLUGIN_NAME.to_string(),
            version: PLUGIN_VERSION.to_string(),
            authors: "scopelink contributors".to_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
