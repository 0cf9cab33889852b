//! Windows secure surface using display affinity
//!
//! `WDA_EXCLUDEFROMCAPTURE` removes the window from captures entirely and
//! needs Windows 10 2004 or later. Older systems get `WDA_MONITOR`, which
//! renders the content black instead.

use crate::shield::SecureSurface;
use crate::utils::{ShieldError, ShieldResult};
use std::ffi::c_void;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    SetWindowDisplayAffinity, WDA_EXCLUDEFROMCAPTURE, WDA_MONITOR, WDA_NONE,
};

/// A top-level window identified by its HWND
///
/// Hosts that are not built on Tauri attach their own windows:
///
/// ```ignore
/// use dash_shield::platform::NativeWindow;
/// use dash_shield::{ScreenCaptureGuard, WindowContext};
/// use std::sync::Arc;
///
/// let ctx = WindowContext::new();
/// ctx.attach(Arc::new(NativeWindow::new(hwnd.0 as isize, "main")));
/// ScreenCaptureGuard::new().handle_command("preventScreenshots", &ctx)?;
/// ```
pub struct NativeWindow {
    /// Raw HWND value
    hwnd: isize,
    label: String,
}

impl NativeWindow {
    pub fn new(hwnd: isize, label: impl Into<String>) -> Self {
        Self {
            hwnd,
            label: label.into(),
        }
    }

    fn handle(&self) -> HWND {
        HWND(self.hwnd as *mut c_void)
    }
}

impl SecureSurface for NativeWindow {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_capture_protected(&self, protected: bool) -> ShieldResult<()> {
        let hwnd = self.handle();

        if !protected {
            return unsafe { SetWindowDisplayAffinity(hwnd, WDA_NONE) }
                .map_err(|e| ShieldError::Platform(e.to_string()));
        }

        match unsafe { SetWindowDisplayAffinity(hwnd, WDA_EXCLUDEFROMCAPTURE) } {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!(
                    "WDA_EXCLUDEFROMCAPTURE rejected for '{}' ({}), falling back to WDA_MONITOR",
                    self.label,
                    e
                );
                unsafe { SetWindowDisplayAffinity(hwnd, WDA_MONITOR) }
                    .map_err(|e| ShieldError::Platform(e.to_string()))
            }
        }
    }
}
