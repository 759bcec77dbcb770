//! Thread-safe table of bound event handlers.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use oriel_common::{BindId, Event, Reply, WindowId};

/// A bound callback.
///
/// Invoked on an engine-owned thread, possibly concurrently with other
/// handlers. Implementations must not assume any particular thread and
/// must not block indefinitely; long work belongs on a thread of their
/// own, with the reply sent by other means.
pub type EventHandler = Arc<dyn Fn(&Event) -> Reply + Send + Sync>;

/// Maps `(window, bind id)` to the handler registered for it.
///
/// Lookups run concurrently with registrations; a registration is visible
/// to every lookup that starts after it returns. Entries live until the
/// process exits. Re-registering a key replaces the handler; nothing else
/// removes one.
#[derive(Default)]
pub struct BindingRegistry {
    handlers: RwLock<HashMap<(WindowId, BindId), EventHandler>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` for `(window, id)`, replacing any previous one.
    pub fn register(&self, window: WindowId, id: BindId, handler: EventHandler) {
        self.handlers.write().insert((window, id), handler);
        debug!(%window, %id, "handler registered");
    }

    /// Handler registered for `(window, id)`, if any.
    ///
    /// Returns a clone so the table lock is released before the handler
    /// runs.
    pub fn lookup(&self, window: WindowId, id: BindId) -> Option<EventHandler> {
        self.handlers.read().get(&(window, id)).cloned()
    }

    /// How many handlers are registered across all windows.
    pub fn count(&self) -> usize {
        self.handlers.read().len()
    }
}
