//! Tauri plugin setup
//!
//! Registers the shield commands and keeps the window context in step with
//! the host's window lifecycle.

use crate::commands::shield::{self, ShieldState};
use crate::config::ShieldConfig;
use std::sync::Arc;
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, RunEvent, Runtime,
};

/// Plugin name used in `plugin:dash-shield|...` invocations
pub const PLUGIN_NAME: &str = "dash-shield";

/// Initialize the plugin
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<ShieldConfig>> {
    Builder::<R, Option<ShieldConfig>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![shield::invoke_method])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            tracing::info!(
                "Dash Shield v{} listening on channel '{}'",
                env!("CARGO_PKG_VERSION"),
                config.channel
            );
            app.manage(ShieldState::new(config));
            Ok(())
        })
        .on_window_ready(|window| {
            if let Some(state) = window.try_state::<ShieldState>() {
                state.window_ready(Arc::new(window.clone()));
            }
        })
        .on_event(|app, event| {
            if let RunEvent::WindowEvent { label, event, .. } = event {
                if let Some(state) = app.try_state::<ShieldState>() {
                    state.window_event(label, event);
                }
            }
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shield::{MethodReply, SecureSurface};
    use tauri::test::{mock_builder, mock_context, noop_assets, MockRuntime};
    use tauri::{WebviewUrl, WebviewWindowBuilder};

    fn mock_app() -> tauri::App<MockRuntime> {
        mock_builder()
            .plugin(init())
            .build(mock_context(noop_assets()))
            .unwrap()
    }

    #[test]
    fn test_setup_manages_default_state() {
        let app = mock_app();
        let state = app.state::<ShieldState>();

        assert_eq!(state.config, ShieldConfig::default());
        assert!(state.context.is_empty());
        assert_eq!(state.invoke("preventScreenshots").unwrap_err().code, "WINDOW_UNAVAILABLE");
    }

    #[test]
    fn test_created_window_is_attached_and_protected() {
        let app = mock_app();
        let window = WebviewWindowBuilder::new(&app, "main", WebviewUrl::default())
            .build()
            .unwrap();
        let state = app.state::<ShieldState>();

        assert!(state.context.is_attached("main"));
        assert_eq!(state.invoke("preventScreenshots"), Ok(MethodReply::success()));
        assert_eq!(state.invoke("unknownCommand"), Ok(MethodReply::NotImplemented));

        assert_eq!(SecureSurface::label(&window), "main");
        assert!(SecureSurface::set_capture_protected(&window, true).is_ok());
    }
}
