//! # cf-platform
//!
//! Platform-specific implementations for ClipFormat.
//!
//! This crate contains the adapters behind the `cf-core` ports: the system
//! clipboard binding, an in-memory clipboard for tests and headless use, and
//! the filesystem staging area used for bitmap transfers.

pub mod adapters;
pub mod clipboard;

pub use adapters::{FilesystemStagingStore, InMemoryClipboard};
pub use clipboard::DesktopClipboard;
