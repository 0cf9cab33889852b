//! Shield-related Tauri commands
//!
//! The frontend sends channel method names here; the reply mirrors the
//! success / error / not-implemented contract of the channel.

use crate::config::ShieldConfig;
use crate::shield::{MethodReply, ScreenCaptureGuard, SecureSurface, WindowContext};
use crate::utils::ErrorResponse;
use std::sync::Arc;
use tauri::{State, WindowEvent};

/// Plugin state managed by the host app
pub struct ShieldState {
    pub guard: ScreenCaptureGuard,
    pub context: WindowContext,
    pub config: ShieldConfig,
}

impl ShieldState {
    pub fn new(config: ShieldConfig) -> Self {
        Self {
            guard: ScreenCaptureGuard::new(),
            context: WindowContext::new(),
            config,
        }
    }

    /// Run a channel call, splitting error replies out for IPC
    pub fn invoke(&self, method: &str) -> Result<MethodReply, ErrorResponse> {
        let _span = tracing::info_span!("channel", name = %self.config.channel, method).entered();

        match self.guard.handle_method_call(method, &self.context) {
            MethodReply::Error(response) => Err(response),
            reply => Ok(reply),
        }
    }

    /// A host window finished loading. Returns whether it was attached.
    pub fn window_ready(&self, surface: Arc<dyn SecureSurface>) -> bool {
        let label = surface.label();
        if !self.config.tracks(&label) {
            tracing::debug!("Ignoring untracked window '{}'", label);
            return false;
        }
        self.context.attach(surface);
        true
    }

    /// Keep focus and attachment in step with the host's window events
    pub fn window_event(&self, label: &str, event: &WindowEvent) {
        match event {
            WindowEvent::Focused(true) if self.context.is_attached(label) => {
                self.context.focus(label);
            }
            WindowEvent::Destroyed => {
                self.context.detach(label);
            }
            _ => {}
        }
    }
}

impl Default for ShieldState {
    fn default() -> Self {
        Self::new(ShieldConfig::default())
    }
}

/// Invoke a method on the shield channel
#[tauri::command]
pub fn invoke_method(
    method: String,
    state: State<'_, ShieldState>,
) -> Result<MethodReply, ErrorResponse> {
    state.invoke(&method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shield::traits::mock::MockSurface;

    #[test]
    fn test_invoke_splits_error_replies() {
        let state = ShieldState::default();

        let err = state.invoke("preventScreenshots").unwrap_err();
        assert_eq!(err.code, "WINDOW_UNAVAILABLE");

        assert_eq!(state.invoke("unknownCommand"), Ok(MethodReply::NotImplemented));
    }

    #[test]
    fn test_invoke_protects_attached_window() {
        let state = ShieldState::default();
        let window = Arc::new(MockSurface::new("main"));
        assert!(state.window_ready(window.clone()));

        assert_eq!(state.invoke("preventScreenshots"), Ok(MethodReply::success()));
        assert!(window.is_protected());
    }

    #[test]
    fn test_window_ready_respects_filter() {
        let state = ShieldState::new(ShieldConfig {
            windows: vec!["main".to_string()],
            ..ShieldConfig::default()
        });
        let devtools = Arc::new(MockSurface::new("devtools"));

        assert!(!state.window_ready(devtools.clone()));
        assert!(!state.context.is_attached("devtools"));
        assert_eq!(state.invoke("preventScreenshots").unwrap_err().code, "WINDOW_UNAVAILABLE");
        assert_eq!(devtools.calls(), 0);

        assert!(state.window_ready(Arc::new(MockSurface::new("main"))));
        assert!(state.context.is_attached("main"));
    }

    #[test]
    fn test_focus_only_applies_to_attached_windows() {
        let state = ShieldState::default();
        let main = Arc::new(MockSurface::new("main"));
        let settings = Arc::new(MockSurface::new("settings"));
        state.window_ready(main.clone());
        state.window_ready(settings.clone());

        state.window_event("main", &WindowEvent::Focused(true));
        state.window_event("ghost", &WindowEvent::Focused(true));
        state.window_event("main", &WindowEvent::Focused(false));

        state.invoke("preventScreenshots").unwrap();
        assert!(main.is_protected());
        assert!(!settings.is_protected());
    }

    #[test]
    fn test_destroyed_window_is_detached() {
        let state = ShieldState::default();
        let main = Arc::new(MockSurface::new("main"));
        state.window_ready(main.clone());

        state.window_event("main", &WindowEvent::Destroyed);

        assert!(!state.context.is_attached("main"));
        assert_eq!(state.invoke("preventScreenshots").unwrap_err().code, "WINDOW_UNAVAILABLE");
        assert_eq!(main.calls(), 0);
    }

    #[test]
    fn test_custom_channel_label_routes_the_same() {
        let state = ShieldState::new(ShieldConfig {
            channel: "secure_screens".to_string(),
            ..ShieldConfig::default()
        });
        state.window_ready(Arc::new(MockSurface::new("main")));

        assert_eq!(state.invoke("preventScreenshots"), Ok(MethodReply::success()));
    }
}
