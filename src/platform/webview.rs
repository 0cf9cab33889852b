//! Tauri windows as secure surfaces
//!
//! `Window` is what the plugin's lifecycle hooks receive; `WebviewWindow`
//! lets apps attach the windows they build themselves.

use crate::shield::SecureSurface;
use crate::utils::{ShieldError, ShieldResult};
use tauri::{Runtime, WebviewWindow, Window};

impl<R: Runtime> SecureSurface for Window<R> {
    fn label(&self) -> String {
        Window::label(self).to_string()
    }

    fn set_capture_protected(&self, protected: bool) -> ShieldResult<()> {
        self.set_content_protected(protected)
            .map_err(|e| ShieldError::Platform(e.to_string()))
    }
}

impl<R: Runtime> SecureSurface for WebviewWindow<R> {
    fn label(&self) -> String {
        WebviewWindow::label(self).to_string()
    }

    fn set_capture_protected(&self, protected: bool) -> ShieldResult<()> {
        self.set_content_protected(protected)
            .map_err(|e| ShieldError::Platform(e.to_string()))
    }
}
