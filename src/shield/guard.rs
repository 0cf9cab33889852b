//! Screen capture guard
//!
//! Maps channel commands onto the secure flag of the current window.

use super::command::{Command, Scope};
use super::context::WindowContext;
use super::reply::MethodReply;
use crate::utils::{ShieldError, ShieldResult};
use std::sync::atomic::{AtomicBool, Ordering};

/// Handles commands from the `dash_shield` channel
#[derive(Debug, Default)]
pub struct ScreenCaptureGuard {
    /// Set once the global-scope limitation has been logged
    global_scope_reported: AtomicBool,
}

impl ScreenCaptureGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a command by method name
    pub fn handle_command(&self, name: &str, ctx: &WindowContext) -> ShieldResult<()> {
        self.execute(&Command::parse(name), ctx)
    }

    /// Handle a command and build the channel reply for it
    pub fn handle_method_call(&self, name: &str, ctx: &WindowContext) -> MethodReply {
        self.handle_command(name, ctx).into()
    }

    /// Execute an already parsed command
    pub fn execute(&self, command: &Command, ctx: &WindowContext) -> ShieldResult<()> {
        let scope = match command.scope() {
            Some(scope) => scope,
            None => {
                tracing::debug!("Method '{}' is not implemented", command.method_name());
                return Err(ShieldError::UnrecognizedCommand(
                    command.method_name().to_string(),
                ));
            }
        };

        let surface = ctx.current().ok_or_else(|| {
            tracing::warn!(
                "'{}' arrived before any window was attached",
                command.method_name()
            );
            ShieldError::WindowUnavailable
        })?;
        let label = surface.label();

        surface.set_capture_protected(true).map_err(|e| {
            tracing::error!("Failed to protect window '{}': {}", label, e);
            e
        })?;

        // Both commands only reach the current window
        if scope == Scope::Global && !self.global_scope_reported.swap(true, Ordering::Relaxed) {
            tracing::warn!(
                "'{}' protected only the current window '{}'; windows created later are not covered",
                command.method_name(),
                label
            );
        }

        tracing::info!("Screen capture blocked for window '{}'", label);
        Ok(())
    }
}
