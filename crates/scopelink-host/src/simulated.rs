//! In-memory host used by the demo binary and tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use scopelink_common::{CommandId, HostError};
use tracing::debug;

use crate::api::{AircraftApi, ChatApi, ClientMessage, FsdApi, HostApis};
use crate::commands::{CommandDefinition, CommandOutcome, CommandProvider};
use crate::session::ConnectionInfo;

#[derive(Default)]
struct SimState {
    connection: Option<ConnectionInfo>,
    visible_count: usize,
    owned_callsigns: Vec<String>,
    messages: Vec<ClientMessage>,
    commands: HashMap<CommandId, (String, Arc<dyn CommandProvider>)>,
}

/// A scriptable radar client: tests and the demo binary mutate the
/// session state and dispatch chat commands against it.
#[derive(Default)]
pub struct SimulatedHost {
    state: Mutex<SimState>,
}

impl SimulatedHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Bundle this host's API handles the way the client would.
    pub fn apis(self: &Arc<Self>) -> HostApis {
        HostApis {
            fsd: Arc::clone(self) as Arc<dyn FsdApi>,
            aircraft: Arc::clone(self) as Arc<dyn AircraftApi>,
            chat: Arc::clone(self) as Arc<dyn ChatApi>,
        }
    }

    pub fn set_connection(&self, connection: Option<ConnectionInfo>) {
        self.state.lock().unwrap().connection = connection;
    }

    pub fn set_visible_count(&self, count: usize) {
        self.state.lock().unwrap().visible_count = count;
    }

    pub fn set_owned_callsigns(&self, callsigns: Vec<String>) {
        self.state.lock().unwrap().owned_callsigns = callsigns;
    }

    /// Messages the plugin has sent to the chat window.
    pub fn sent_messages(&self) -> Vec<ClientMessage> {
        self.state.lock().unwrap().messages.clone()
    }

    /// Names of currently registered commands, sorted.
    pub fn registered_commands(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .state
            .lock()
            .unwrap()
            .commands
            .values()
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Route a chat command line to the registered provider.
    ///
    /// Matches the longest registered name that prefixes the line; the
    /// remainder is split into whitespace-separated arguments.
    pub fn dispatch(&self, line: &str) -> Result<CommandOutcome, HostError> {
        let (id, provider, rest) = {
            let state = self.state.lock().unwrap();
            let mut best: Option<(&CommandId, &str)> = None;
            for (id, (name, _)) in state.commands.iter() {
                let matches = line == name.as_str()
                    || line
                        .strip_prefix(name.as_str())
                        .is_some_and(|r| r.starts_with(' '));
                if matches && best.is_none_or(|(_, n)| name.len() > n.len()) {
                    best = Some((id, name.as_str()));
                }
            }
            let Some((id, name)) = best else {
                return Err(HostError::UnknownCommand(line.to_string()));
            };
            let rest = line[name.len()..].to_string();
            let provider = Arc::clone(&state.commands[id].1);
            (id.clone(), provider, rest)
        };

        let args: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
        debug!("dispatching '{line}' with {} args", args.len());
        Ok(provider.execute(&id, &args))
    }
}

impl FsdApi for SimulatedHost {
    fn connection(&self) -> Option<ConnectionInfo> {
        self.state.lock().unwrap().connection.clone()
    }
}

impl AircraftApi for SimulatedHost {
    fn visible_count(&self) -> usize {
        self.state.lock().unwrap().visible_count
    }

    fn owned_callsigns(&self) -> Vec<String> {
        self.state.lock().unwrap().owned_callsigns.clone()
    }
}

impl ChatApi for SimulatedHost {
    fn send_client_message(&self, message: ClientMessage) {
        self.state.lock().unwrap().messages.push(message);
    }

    fn register_command(
        &self,
        definition: CommandDefinition,
        provider: Arc<dyn CommandProvider>,
    ) -> Result<CommandId, HostError> {
        let mut state = self.state.lock().unwrap();
        if state
            .commands
            .values()
            .any(|(name, _)| *name == definition.name)
        {
            return Err(HostError::CommandRegistration(format!(
                "'{}' is already registered",
                definition.name
            )));
        }
        let id = CommandId::new();
        state.commands.insert(id.clone(), (definition.name, provider));
        Ok(id)
    }

    fn unregister_command(&self, id: &CommandId) {
        self.state.lock().unwrap().commands.remove(id);
    }
}
