//! ClipFormat Application Layer
//!
//! This crate contains the clipboard format helper use case.

pub mod usecases;

pub use usecases::clipboard::ClipboardTextFormatHelper;
