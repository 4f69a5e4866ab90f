//! Chat command registration types.

use scopelink_common::CommandId;

/// Definition handed to the client when registering a chat command.
#[derive(Debug, Clone)]
pub struct CommandDefinition {
    /// Full command name, e.g. "presence toggle".
    pub name: String,
    pub description: String,
}

impl CommandDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Result of executing a chat command.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl CommandOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Receiver side of command dispatch: the client calls `execute` with
/// the id it returned at registration time.
pub trait CommandProvider: Send + Sync {
    fn execute(&self, command_id: &CommandId, args: &[String]) -> CommandOutcome;
}
