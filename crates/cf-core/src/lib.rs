//! # cf-core
//!
//! Core domain models and business logic for ClipFormat.
//!
//! This crate contains the clipboard format model, the HTML fragment codec and
//! the ports that platform adapters implement. It never talks to the operating
//! system clipboard directly.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod error;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipboardFormat, ClipboardPayload, HtmlFragmentHeader, OutgoingClipboardPackage,
    StreamReference,
};
pub use config::ClipboardConfig;
pub use error::{ClipboardError, ClipboardResult};
