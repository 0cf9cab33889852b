//! Window attachment state
//!
//! The host's lifecycle hooks attach and detach windows here, and the
//! context is handed to the guard on every call.

use super::traits::SecureSurface;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct ContextInner {
    /// Attached surfaces in attach order
    surfaces: Vec<Arc<dyn SecureSurface>>,
    /// Label of the focused surface
    focused: Option<String>,
}

/// Windows currently attached by the host
#[derive(Default)]
pub struct WindowContext {
    inner: Mutex<ContextInner>,
}

impl WindowContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a surface, replacing any surface already attached under its label
    pub fn attach(&self, surface: Arc<dyn SecureSurface>) {
        let label = surface.label();
        let mut inner = self.inner.lock();
        inner.surfaces.retain(|s| s.label() != label);
        inner.surfaces.push(surface);
        tracing::debug!("Attached window '{}' ({} attached)", label, inner.surfaces.len());
    }

    /// Detach the surface with `label`. Returns whether one was attached.
    pub fn detach(&self, label: &str) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.surfaces.len();
        inner.surfaces.retain(|s| s.label() != label);
        if inner.focused.as_deref() == Some(label) {
            inner.focused = None;
        }
        let removed = inner.surfaces.len() != before;
        if removed {
            tracing::debug!("Detached window '{}'", label);
        }
        removed
    }

    /// Mark `label` as the foreground window
    pub fn focus(&self, label: &str) {
        self.inner.lock().focused = Some(label.to_string());
    }

    /// The window commands apply to: the focused one if still attached,
    /// otherwise the most recently attached.
    pub fn current(&self) -> Option<Arc<dyn SecureSurface>> {
        let inner = self.inner.lock();
        inner
            .focused
            .as_deref()
            .and_then(|label| inner.surfaces.iter().find(|s| s.label() == label))
            .or_else(|| inner.surfaces.last())
            .cloned()
    }

    pub fn is_attached(&self, label: &str) -> bool {
        self.inner.lock().surfaces.iter().any(|s| s.label() == label)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shield::traits::mock::MockSurface;

    #[test]
    fn test_empty_context_has_no_current() {
        let ctx = WindowContext::new();
        assert!(ctx.is_empty());
        assert!(ctx.current().is_none());
    }

    #[test]
    fn test_current_falls_back_to_last_attached() {
        let ctx = WindowContext::new();
        ctx.attach(Arc::new(MockSurface::new("main")));
        ctx.attach(Arc::new(MockSurface::new("settings")));

        assert_eq!(ctx.current().unwrap().label(), "settings");
    }

    #[test]
    fn test_focused_window_wins() {
        let ctx = WindowContext::new();
        ctx.attach(Arc::new(MockSurface::new("main")));
        ctx.attach(Arc::new(MockSurface::new("settings")));
        ctx.focus("main");

        assert_eq!(ctx.current().unwrap().label(), "main");
    }

    #[test]
    fn test_focus_on_unattached_label_is_ignored() {
        let ctx = WindowContext::new();
        ctx.attach(Arc::new(MockSurface::new("main")));
        ctx.focus("ghost");

        assert_eq!(ctx.current().unwrap().label(), "main");
    }

    #[test]
    fn test_detach_clears_focus() {
        let ctx = WindowContext::new();
        ctx.attach(Arc::new(MockSurface::new("main")));
        ctx.attach(Arc::new(MockSurface::new("settings")));
        ctx.focus("settings");

        assert!(ctx.detach("settings"));
        assert!(!ctx.detach("settings"));
        assert_eq!(ctx.current().unwrap().label(), "main");

        assert!(ctx.detach("main"));
        assert!(ctx.current().is_none());
    }

    #[test]
    fn test_reattach_replaces_surface() {
        let ctx = WindowContext::new();
        ctx.attach(Arc::new(MockSurface::new("main")));
        ctx.attach(Arc::new(MockSurface::new("main")));

        assert_eq!(ctx.len(), 1);
        assert!(ctx.is_attached("main"));
    }
}
