//! Screenshot prevention core
//!
//! This module turns channel method names into secure-flag mutations on
//! the host's current window. It has no dependency on the host framework.

pub mod command;
pub mod context;
pub mod guard;
pub mod reply;
pub mod traits;

pub use command::{Command, Scope, CHANNEL_NAME};
pub use context::WindowContext;
pub use guard::ScreenCaptureGuard;
pub use reply::MethodReply;
pub use traits::SecureSurface;
