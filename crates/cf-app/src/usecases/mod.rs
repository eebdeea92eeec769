//! Business logic use cases
pub mod clipboard;
