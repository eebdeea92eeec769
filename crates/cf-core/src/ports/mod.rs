//! Port interfaces for the application layer
//!
//! Ports define the contract between the helper use case and the
//! infrastructure that talks to the host platform. Implementations live in
//! `cf-platform`.

mod clipboard_platform;
mod staging_store;

pub use clipboard_platform::ClipboardPlatformPort;
pub use staging_store::StagingStorePort;
