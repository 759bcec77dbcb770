//! Bridge construction and process-wide engine operations.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use oriel_config::BridgeConfig;

use crate::engine::Engine;
use crate::registry::BindingRegistry;
use crate::window::Window;

/// Entry point of the crate: owns the engine connection and the handler
/// registry, and mints [`Window`] handles.
///
/// Cheap to clone; clones share the same registry and engine. There is no
/// process-wide instance baked in; an application that wants one keeps a
/// `Bridge` in a `OnceLock` itself.
#[derive(Clone)]
pub struct Bridge {
    engine: Arc<dyn Engine>,
    registry: Arc<BindingRegistry>,
}

impl Bridge {
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self {
            engine,
            registry: Arc::new(BindingRegistry::new()),
        }
    }

    /// Create a new engine window and return a handle to it.
    pub fn create_window(&self) -> Window {
        let id = self.engine.create_window();
        debug!(window = %id, "window created");
        Window::new(id, self.engine.clone(), self.registry.clone())
    }

    /// Budget for the engine to bring up a browser when a window is first
    /// shown. Zero waits forever.
    pub fn set_startup_timeout(&self, timeout: Duration) {
        self.engine.set_startup_timeout(timeout);
    }

    /// Apply the process-wide settings from a config.
    pub fn apply_config(&self, config: &BridgeConfig) {
        self.set_startup_timeout(Duration::from_secs(config.startup_timeout_secs));
        info!(
            startup_timeout_secs = config.startup_timeout_secs,
            "config applied"
        );
    }

    /// Close every window and unblock [`Bridge::wait`].
    pub fn exit(&self) {
        info!("closing all windows");
        self.engine.exit_all();
    }

    /// Block the calling thread until every window is closed.
    pub fn wait(&self) {
        self.engine.wait_all();
    }

    pub(crate) fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    pub(crate) fn registry(&self) -> &BindingRegistry {
        self.registry.as_ref()
    }
}
