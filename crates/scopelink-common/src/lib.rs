pub mod errors;
pub mod id;

pub use errors::{ConfigError, HostError, PresenceError, ScopelinkError};
pub use id::{new_id, CommandId};

pub type Result<T> = std::result::Result<T, ScopelinkError>;
