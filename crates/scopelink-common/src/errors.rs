use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("command registration error: {0}")]
    CommandRegistration(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("chat error: {0}")]
    Chat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("presence connect error: {0}")]
    Connect(String),

    #[error("presence publish error: {0}")]
    Publish(String),

    #[error("presence queue full")]
    QueueFull,

    #[error("presence client shut down")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ScopelinkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Presence(#[from] PresenceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
