//! Seam to the radar client SDK.
//!
//! The real client hands the plugin a set of API objects at
//! initialization; this crate models that surface as traits so the
//! reporter can be driven by the live client, by the simulated host in
//! the demo binary, or by test doubles. The handles are only valid
//! between initialize and shutdown and must not be retained past that.

pub mod api;
pub mod commands;
pub mod session;
pub mod simulated;

pub use api::{AircraftApi, ChatApi, ClientMessage, FsdApi, HostApis};
pub use commands::{CommandDefinition, CommandOutcome, CommandProvider};
pub use session::{format_frequency, ConnectionInfo, Facility};
pub use simulated::SimulatedHost;
