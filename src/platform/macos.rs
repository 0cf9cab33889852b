//! macOS secure surface using NSWindow sharing types

use crate::shield::SecureSurface;
use crate::utils::{ShieldError, ShieldResult};
use objc2::msg_send;
use objc2::runtime::AnyObject;
use std::ffi::c_void;

// NSWindowSharingType
const NS_WINDOW_SHARING_NONE: usize = 0;
const NS_WINDOW_SHARING_READ_ONLY: usize = 1;

/// An `NSWindow` owned by the host
///
/// Hosts that are not built on Tauri attach their own windows:
///
/// ```ignore
/// use dash_shield::platform::NativeWindow;
/// use dash_shield::{ScreenCaptureGuard, WindowContext};
/// use std::sync::Arc;
///
/// let ctx = WindowContext::new();
/// let window = unsafe { NativeWindow::from_raw(ns_window_ptr, "main")? };
/// ctx.attach(Arc::new(window));
/// ScreenCaptureGuard::new().handle_command("preventScreenshots", &ctx)?;
/// ```
pub struct NativeWindow {
    /// `NSWindow*` stored as an address, never zero
    ns_window: usize,
    label: String,
}

impl NativeWindow {
    /// Wrap a raw `NSWindow*`. Fails on a null pointer.
    ///
    /// # Safety
    ///
    /// A non-null `ns_window` must point to a live `NSWindow` for as long as
    /// this value is attached, and [`SecureSurface::set_capture_protected`]
    /// must only be called on the main thread.
    pub unsafe fn from_raw(ns_window: *mut c_void, label: impl Into<String>) -> ShieldResult<Self> {
        if ns_window.is_null() {
            return Err(ShieldError::Platform("null NSWindow".to_string()));
        }
        Ok(Self {
            ns_window: ns_window as usize,
            label: label.into(),
        })
    }
}

impl SecureSurface for NativeWindow {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_capture_protected(&self, protected: bool) -> ShieldResult<()> {
        let sharing_type = if protected {
            NS_WINDOW_SHARING_NONE
        } else {
            NS_WINDOW_SHARING_READ_ONLY
        };

        let window = self.ns_window as *mut AnyObject;
        unsafe {
            let _: () = msg_send![window, setSharingType: sharing_type];
        }
        tracing::debug!("Set sharing type {} on '{}'", sharing_type, self.label);
        Ok(())
    }
}
