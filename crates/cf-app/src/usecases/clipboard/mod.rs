pub mod format_helper;

pub use format_helper::ClipboardTextFormatHelper;
