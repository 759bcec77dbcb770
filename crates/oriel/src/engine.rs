//! The contract between the bridge and the native engine.
//!
//! String ownership across the boundary follows the C convention: every
//! `&str` argument is borrowed for the duration of the call and the engine
//! copies whatever it needs to keep. The script response buffer is owned
//! and sized by the caller; the engine writes into it during the call and
//! never retains a pointer to it afterwards.

use std::time::Duration;

use oriel_common::{BindError, BindId, BrowserKind, EventNumber, RuntimeKind, WindowId};

/// Low-level operations the native engine exposes to the bridge.
///
/// A production implementation is an FFI adapter over the engine's C ABI;
/// tests use an in-process fake. The engine calls back into
/// [`Bridge::dispatch_event`](crate::Bridge::dispatch_event) from its own
/// threads, so implementations must be callable from any thread.
pub trait Engine: Send + Sync {
    /// Create a new window and return its process-unique id.
    fn create_window(&self) -> WindowId;

    /// Associate `element` with a callback slot on `window`, returning the
    /// id the engine will report for its events. An empty element name
    /// receives every event on the window. Binding the same element again
    /// returns the same id.
    fn bind(&self, window: WindowId, element: &str) -> Result<BindId, BindError>;

    /// Look up the id previously assigned to `element` on `window`.
    /// `None` means the element was never bound.
    fn bound_id(&self, window: WindowId, element: &str) -> Option<BindId>;

    /// Hand the serialized result of a handler back to the engine, tagged
    /// with the number of the browser-side call it answers.
    fn set_event_response(&self, window: WindowId, event: EventNumber, body: &str);

    /// Execute script in `window` and block until it finishes or
    /// `timeout_secs` elapses (0 waits forever). The engine writes the
    /// UTF-8 result into `out`, truncated to at most `out.len() - 1` bytes
    /// and NUL-terminated. Returns false when the script failed or timed
    /// out; whatever was written stays in `out`.
    fn run_script(&self, window: WindowId, script: &str, timeout_secs: u64, out: &mut [u8])
        -> bool;

    /// Execute script without waiting for completion or a result.
    fn run_script_detached(&self, window: WindowId, script: &str);

    /// Show `content` (embedded markup or a file path) in the window using
    /// the best browser found on the machine, refreshing if the window is
    /// already shown. Returns false when no browser could be driven.
    fn show(&self, window: WindowId, content: &str) -> bool;

    /// Like [`Engine::show`] with a specific browser.
    fn show_with_browser(&self, window: WindowId, content: &str, browser: BrowserKind) -> bool;

    /// Whether the window currently has a live browser view attached.
    fn is_shown(&self, window: WindowId) -> bool;

    /// Close the window. Its id is dead afterwards.
    fn close(&self, window: WindowId);

    /// Allow or refuse additional clients attaching to the window.
    fn set_multi_access(&self, window: WindowId, allow: bool);

    /// Select the runtime for server-side `.js` / `.ts` files.
    fn set_runtime(&self, window: WindowId, runtime: RuntimeKind);

    /// Process-wide budget for a browser to connect at startup. Zero waits
    /// forever.
    fn set_startup_timeout(&self, timeout: Duration);

    /// Close every window and unblock [`Engine::wait_all`].
    fn exit_all(&self);

    /// Block until all windows are closed.
    fn wait_all(&self);
}
