pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_or_default, resolve_config};
pub use wiring::{wire_desktop_helper, wire_helper, WiringError, WiringResult};
