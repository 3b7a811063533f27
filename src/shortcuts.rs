//! Process-wide keyboard shortcut registry.
//!
//! Keyboard shortcuts are process-level state: a host window delivers key
//! events to one place regardless of which surface has the pointer. This
//! module models that as an explicit registry with subscribe-on-mount /
//! unsubscribe-on-drop semantics ([`Subscription`] is an RAII guard), so a
//! surface that unmounts can never leave a listener behind.
//!
//! [`QuickCapture`] is the one shortcut consumer shipped with the crate:
//! Cmd/Ctrl+K toggles the capture modal, Escape closes it while open.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// A key event as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name, e.g. `"k"` or `"Escape"`.
    pub key: String,
    /// Platform command modifier (Cmd on macOS).
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyEvent {
    pub fn key(name: impl Into<String>) -> Self {
        Self { key: name.into(), meta: false, ctrl: false }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    fn command(&self) -> bool {
        self.meta || self.ctrl
    }
}

type Handler = Box<dyn FnMut(&KeyEvent) -> bool + Send>;

#[derive(Default)]
struct RegistryInner {
    handlers: Vec<(u64, Handler)>,
    next_id: u64,
}

/// Cheap-clone handle to a shortcut registry. Handlers run in subscription
/// order; the first one that consumes the event stops dispatch.
#[derive(Clone, Default)]
pub struct ShortcutRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Dropping the returned guard unsubscribes it.
    #[must_use = "dropping the subscription immediately unsubscribes the handler"]
    pub fn subscribe(&self, handler: Handler) -> Subscription {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, handler));
        Subscription { registry: self.clone(), id }
    }

    /// Deliver a key event; returns whether any handler consumed it.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        let mut inner = self.inner.lock();
        for (_, handler) in inner.handlers.iter_mut() {
            if handler(event) {
                return true;
            }
        }
        false
    }

    fn unsubscribe(&self, id: u64) {
        self.inner.lock().handlers.retain(|(h, _)| *h != id);
    }

    #[cfg(test)]
    fn handler_count(&self) -> usize {
        self.inner.lock().handlers.len()
    }
}

/// The process-wide registry a host window feeds its key events into.
pub fn global() -> ShortcutRegistry {
    static GLOBAL: Lazy<ShortcutRegistry> = Lazy::new(ShortcutRegistry::default);
    GLOBAL.clone()
}

/// RAII guard for a registered handler; unsubscribes on drop.
pub struct Subscription {
    registry: ShortcutRegistry,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.unsubscribe(self.id);
    }
}

/// Quick-capture modal state machine: Cmd/Ctrl+K toggles, Escape closes
/// while open. Mount subscribes its key handler; unmount (or drop) removes
/// it.
#[derive(Default)]
pub struct QuickCapture {
    open: Arc<Mutex<bool>>,
    subscription: Option<Subscription>,
}

impl QuickCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, registry: &ShortcutRegistry) {
        let open = Arc::clone(&self.open);
        self.subscription = Some(registry.subscribe(Box::new(move |event| {
            if event.command() && event.key == "k" {
                let mut open = open.lock();
                *open = !*open;
                debug!(open = *open, "quick capture toggled");
                return true;
            }
            if event.key == "Escape" {
                let mut open = open.lock();
                if *open {
                    *open = false;
                    return true;
                }
            }
            false
        })));
    }

    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    pub fn is_open(&self) -> bool {
        *self.open.lock()
    }

    pub fn close(&self) {
        *self.open.lock() = false;
    }
}
