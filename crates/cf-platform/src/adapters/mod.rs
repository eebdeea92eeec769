pub mod in_memory_clipboard;
pub mod staging_store;

pub use in_memory_clipboard::InMemoryClipboard;
pub use staging_store::FilesystemStagingStore;
