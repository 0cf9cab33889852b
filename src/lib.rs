//! Dash Shield - keep app windows out of screenshots and screen recordings.
//!
//! The [`shield`] module holds the host-independent core: a
//! [`ScreenCaptureGuard`](shield::ScreenCaptureGuard) that answers the
//! `dash_shield` channel by setting the secure flag on the current window.
//! With the `tauri` feature (on by default) the crate is also a Tauri plugin:
//!
//! ```ignore
//! tauri::Builder::default()
//!     .plugin(dash_shield::init())
//! ```

pub mod config;
pub mod platform;
pub mod shield;
pub mod utils;

#[cfg(feature = "tauri")]
pub mod commands;
#[cfg(feature = "tauri")]
mod plugin;

pub use config::ShieldConfig;
pub use shield::{Command, MethodReply, ScreenCaptureGuard, SecureSurface, WindowContext};
pub use utils::{ErrorResponse, ShieldError, ShieldResult};

#[cfg(feature = "tauri")]
pub use plugin::{init, PLUGIN_NAME};
