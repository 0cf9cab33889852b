//! Surface trait definitions
//!
//! Platform-agnostic seam between the guard and whatever window the host
//! hands us.

use crate::utils::ShieldResult;

/// A window or surface whose content can be excluded from capture
pub trait SecureSurface: Send + Sync {
    /// Stable identifier of the surface (the host's window label)
    fn label(&self) -> String;

    /// Set or clear the secure/no-capture attribute.
    ///
    /// While set, the OS compositor leaves the surface's content out of
    /// screenshots, screen recordings and task-switcher previews.
    fn set_capture_protected(&self, protected: bool) -> ShieldResult<()>;
}
