//! Platform-specific secure surfaces
//!
//! Native window handles that implement [`SecureSurface`](crate::shield::SecureSurface)
//! for hosts that hand out raw windows instead of Tauri ones.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(feature = "tauri")]
mod webview;

#[cfg(target_os = "macos")]
pub use macos::NativeWindow;

#[cfg(target_os = "windows")]
pub use windows::NativeWindow;
