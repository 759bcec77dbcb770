//! Per-window handle: binding, showing, script execution, settings.

use std::sync::Arc;

use tracing::debug;

use oriel_common::{
    BindError, BindId, BrowserKind, Event, OrielError, Reply, RuntimeKind, ScriptError, WindowId,
};
use oriel_config::BridgeConfig;

use crate::engine::Engine;
use crate::registry::BindingRegistry;
use crate::script::ScriptOptions;

/// Handle to one engine-owned window.
///
/// Clones refer to the same window and may be used from any thread. The
/// handle stays meaningful until [`Window::close`]; the engine ignores
/// operations on a closed window.
#[derive(Clone)]
pub struct Window {
    id: WindowId,
    engine: Arc<dyn Engine>,
    registry: Arc<BindingRegistry>,
}

impl Window {
    pub(crate) fn new(
        id: WindowId,
        engine: Arc<dyn Engine>,
        registry: Arc<BindingRegistry>,
    ) -> Self {
        Self {
            id,
            engine,
            registry,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Bind a handler to the events of `element`.
    ///
    /// An empty element name receives every event on the window. Binding
    /// the same element again keeps its id and replaces the handler; there
    /// is no unbind.
    pub fn bind<F>(&self, element: &str, handler: F) -> Result<BindId, BindError>
    where
        F: Fn(&Event) -> Reply + Send + Sync + 'static,
    {
        let id = self.engine.bind(self.id, element)?;
        self.registry.register(self.id, id, Arc::new(handler));
        debug!(window = %self.id, element, %id, "element bound");
        Ok(id)
    }

    /// Show embedded markup or a file in the window, refreshing if it is
    /// already shown. Uses the best browser found on the machine.
    pub fn show(&self, content: &str) -> Result<(), OrielError> {
        if self.engine.show(self.id, content) {
            Ok(())
        } else {
            Err(OrielError::Window(format!("failed to show {}", self.id)))
        }
    }

    /// Like [`Window::show`] with a specific browser.
    pub fn show_with(&self, content: &str, browser: BrowserKind) -> Result<(), OrielError> {
        if self.engine.show_with_browser(self.id, content, browser) {
            Ok(())
        } else {
            Err(OrielError::Window(format!(
                "failed to show {} with {browser:?}",
                self.id
            )))
        }
    }

    /// Whether a live browser view is attached to the window.
    pub fn is_shown(&self) -> bool {
        self.engine.is_shown(self.id)
    }

    /// Close the window. The id and every handle to it are dead afterwards.
    pub fn close(&self) {
        debug!(window = %self.id, "window closed");
        self.engine.close(self.id);
    }

    /// Allow or refuse more than one browser client on this window.
    pub fn set_multi_access(&self, allow: bool) {
        self.engine.set_multi_access(self.id, allow);
    }

    /// Runtime for server-side `.js` / `.ts` files.
    pub fn set_runtime(&self, runtime: RuntimeKind) {
        self.engine.set_runtime(self.id, runtime);
    }

    /// Run script in the window and block for its result.
    ///
    /// Blocks the calling thread until the engine responds or the timeout
    /// in `options` elapses; run it from a dedicated thread when the
    /// caller cannot stall.
    pub fn eval_script(&self, script: &str, options: ScriptOptions) -> Result<String, ScriptError> {
        crate::script::eval(self.engine.as_ref(), self.id, script, options)
    }

    /// Run script without waiting for completion or a result.
    pub fn run_script(&self, script: &str) {
        self.engine.run_script_detached(self.id, script);
    }

    /// Apply the per-window defaults from a config.
    pub fn apply_defaults(&self, config: &BridgeConfig) {
        self.set_multi_access(config.window.multi_access);
        self.set_runtime(config.window.runtime);
    }
}
