mod cli;
mod plugin;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use scopelink_config::ScopelinkConfig;
use scopelink_host::{ConnectionInfo, Facility, SimulatedHost};
use scopelink_presence::{LogTransport, PresenceClient, PresenceClientConfig};

/// Seed the simulated client with a plausible controller session.
fn seed_demo_session(host: &SimulatedHost) {
    host.set_connection(Some(ConnectionInfo {
        callsign: "LFPG_APP".into(),
        facility: Facility::Approach,
        frequencies_hz: vec![134_475_000],
    }));
    host.set_visible_count(12);
    host.set_owned_callsigns(vec![
        "AFR123".into(),
        "BAW456".into(),
        "DLH789".into(),
        "EZY101".into(),
    ]);
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config (CLI path override wins over the platform default)
    let config = match args.config.as_deref() {
        Some(path) => scopelink_config::load_from_path(Path::new(path)),
        None => scopelink_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        ScopelinkConfig::default()
    });

    // Initialize logging: CLI override, then the config [logging] level
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("scopelink={}", config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "scopelink=info".parse().unwrap()),
            ),
        )
        .init();

    // Simulated radar client standing in for the real host SDK
    let host = SimulatedHost::new();
    seed_demo_session(&host);

    // Presence client over the logging transport
    let client_config = PresenceClientConfig {
        client_id: config.presence.client_id.clone(),
        queue_depth: config.presence.queue_depth as usize,
    };
    let (client, presence_events) =
        match PresenceClient::start(Box::new(LogTransport), client_config) {
            Ok(started) => started,
            Err(e) => {
                tracing::error!("failed to start presence client: {e}");
                return;
            }
        };
    let client = Arc::new(client);

    let mut plugin = plugin::ScopelinkPlugin::new();
    let metadata = plugin.metadata();
    tracing::info!("{} v{} starting...", metadata.name, metadata.version);
    tracing::debug!("authors: {}", metadata.authors);

    plugin.initialize(&config, host.apis(), Arc::clone(&client) as _);
    if !plugin.is_initialized() {
        tracing::warn!("running degraded: command registration failed");
    }

    // Show the command surface working against the simulated client
    for line in ["presence version", "presence help"] {
        if let Err(e) = host.dispatch(line) {
            tracing::warn!("command '{line}' failed: {e}");
        }
    }

    // Run until ctrl-c, relaying presence client events into chat
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        if let Err(e) = ctrlc::set_handler(move || running.store(false, Ordering::SeqCst)) {
            tracing::warn!("failed to install ctrl-c handler: {e}");
        }
    }

    tracing::info!("running, press ctrl-c to stop");
    while running.load(Ordering::SeqCst) {
        match presence_events.recv_timeout(Duration::from_millis(250)) {
            Ok(event) => plugin.announce_presence_event(&event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    plugin.shutdown();
    client.shutdown();

    // Echo the chat transcript the plugin produced during the session
    for message in host.sent_messages() {
        tracing::debug!("[chat] {}: {}", message.sender, message.text);
    }
    tracing::info!("Shutdown complete");
}
