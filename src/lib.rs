//! # clipformat
//!
//! Clipboard text, RTF, HTML and bitmap format helper.
//!
//! The library surface re-exports the helper and its domain types; the
//! `bootstrap` module assembles a ready-to-use helper from configuration.

pub mod bootstrap;
pub mod cli;

pub use cf_app::ClipboardTextFormatHelper;
pub use cf_core::clipboard::{html_fragment, plain_text};
pub use cf_core::{ClipboardConfig, ClipboardError, ClipboardFormat, ClipboardResult};
