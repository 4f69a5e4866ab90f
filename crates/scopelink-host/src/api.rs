//! Host API traits handed to the plugin at initialization.

use std::sync::Arc;

use scopelink_common::{CommandId, HostError};

use crate::commands::{CommandDefinition, CommandProvider};
use crate::session::ConnectionInfo;

/// Network session queries.
pub trait FsdApi: Send + Sync {
    /// The active connection, or `None` when not connected.
    fn connection(&self) -> Option<ConnectionInfo>;
}

/// Aircraft roster queries.
pub trait AircraftApi: Send + Sync {
    /// Count of all aircraft currently visible on the scope.
    fn visible_count(&self) -> usize;

    /// Callsigns of aircraft owned by the local controller.
    fn owned_callsigns(&self) -> Vec<String>;
}

/// Message sent to the client's chat window.
#[derive(Debug, Clone)]
pub struct ClientMessage {
    pub sender: String,
    pub text: String,
    pub dedicated_channel: bool,
}

/// Chat output and command registration.
pub trait ChatApi: Send + Sync {
    fn send_client_message(&self, message: ClientMessage);

    fn register_command(
        &self,
        definition: CommandDefinition,
        provider: Arc<dyn CommandProvider>,
    ) -> Result<CommandId, HostError>;

    fn unregister_command(&self, id: &CommandId);
}

/// Bundle of host API handles captured at initialization.
///
/// Valid only between initialize and shutdown; the plugin drops the
/// bundle on shutdown and never retains the handles past it.
#[derive(Clone)]
pub struct HostApis {
    pub fsd: Arc<dyn FsdApi>,
    pub aircraft: Arc<dyn AircraftApi>,
    pub chat: Arc<dyn ChatApi>,
}
