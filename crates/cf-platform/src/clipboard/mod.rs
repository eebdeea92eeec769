mod common;
mod desktop;
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
mod x11_persist;

pub use desktop::DesktopClipboard;
