//! Chat command registration and handling.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use scopelink_common::{CommandId, HostError};
use scopelink_host::{ChatApi, ClientMessage, CommandDefinition, CommandOutcome, CommandProvider};

use super::core::{PLUGIN_NAME, PLUGIN_VERSION};

#[derive(Debug, Clone, Copy)]
enum CommandKind {
    Version,
    Help,
    Toggle,
}

/// Handles the `presence ...` chat commands.
pub(super) struct ScopelinkCommandProvider {
    chat: Arc<dyn ChatApi>,
    enabled: Arc<AtomicBool>,
    /// Filled in as the client hands back ids during registration.
    bindings: Mutex<HashMap<CommandId, CommandKind>>,
}

impl ScopelinkCommandProvider {
    fn new(chat: Arc<dyn ChatApi>, enabled: Arc<AtomicBool>) -> Self {
        Self {
            chat,
            enabled,
            bindings: Mutex::new(HashMap::new()),
        }
    }

    fn bind(&self, id: CommandId, kind: CommandKind) {
        self.bindings.lock().unwrap().insert(id, kind);
    }

    fn say(&self, message: &str) {
        self.chat.send_client_message(ClientMessage {
            sender: PLUGIN_NAME.to_string(),
            text: message.to_string(),
            dedicated_channel: true,
        });
    }
}

impl CommandProvider for ScopelinkCommandProvider {
    fn execute(&self, command_id: &CommandId, _args: &[String]) -> CommandOutcome {
        let kind = self.bindings.lock().unwrap().get(command_id).copied();
        match kind {
            Some(CommandKind::Version) => {
                self.say(&format!("Version {PLUGIN_VERSION}"));
                CommandOutcome::ok()
            }
            Some(CommandKind::Help) => {
                self.say(".presence version");
                self.say(".presence toggle");
                CommandOutcome::ok()
            }
            Some(CommandKind::Toggle) => {
                let was_enabled = self.enabled.fetch_xor(true, Ordering::SeqCst);
                let status = if was_enabled { "disabled" } else { "enabled" };
                self.say(&format!("Presence reporting {status}"));
                CommandOutcome::ok()
            }
            None => {
                let error = "Invalid command. Use .presence <command>";
                self.say(error);
                CommandOutcome::fail(error)
            }
        }
    }
}

/// Register the command surface with the client.
///
/// Returns the ids needed for unregistration at shutdown.
pub(super) fn register_all(
    chat: &Arc<dyn ChatApi>,
    enabled: Arc<AtomicBool>,
) -> Result<Vec<CommandId>, HostError> {
    let provider = Arc::new(ScopelinkCommandProvider::new(Arc::clone(chat), enabled));

    let definitions = [
        ("presence version", "return the scopelink version", CommandKind::Version),
        (
            "presence help",
            "display all the available scopelink commands",
            CommandKind::Help,
        ),
        ("presence toggle", "toggle presence reporting", CommandKind::Toggle),
    ];

    let mut ids = Vec::with_capacity(definitions.len());
    for (name, description, kind) in definitions {
        let id = chat.register_command(
            CommandDefinition::new(name, description),
            Arc::clone(&provider) as Arc<dyn CommandProvider>,
        )?;
        provider.bind(id.clone(), kind);
        ids.push(id);
    }
    Ok(ids)
}

// =============================================================================
// TESTS
// =============================================================================
