//! End-to-end walkthrough: a counter page driven through the bridge.
//!
//! A real deployment implements [`Engine`] as an FFI adapter over the
//! native engine's C ABI. Here a tiny in-process stub stands in, so the
//! demo runs anywhere and shows the full path: bind, show, event
//! dispatch, reply delivery, and synchronous script execution.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use oriel::{
    encode_embed, BindError, BindId, Bridge, BridgeConfig, BrowserKind, Engine, EventKind,
    EventNumber, OrielError, Payload, Reply, RuntimeKind, ScriptOptions, WindowId,
};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Counter</title></head>
  <body>
    <h1 id="status">0</h1>
    <button id="increment">+1</button>
    <button id="reset">Reset</button>
  </body>
</html>"#;

fn main() -> Result<(), OrielError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("oriel=debug".parse().expect("static directive parses")),
        )
        .init();

    let config = oriel_config::load_default().unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        BridgeConfig::default()
    });

    let bridge = Bridge::new(Arc::new(StubEngine::default()));
    bridge.apply_config(&config);

    let window = bridge.create_window();
    window.apply_defaults(&config);

    let count = Arc::new(AtomicI64::new(0));

    let n = count.clone();
    window.bind("increment", move |event| {
        let step = if event.payload.is_empty() {
            1
        } else {
            event.payload.as_int()
        };
        Reply::Int(n.fetch_add(step, Ordering::SeqCst) + step)
    })?;

    let n = count.clone();
    window.bind("reset", move |_event| {
        n.store(0, Ordering::SeqCst);
        Reply::None
    })?;

    window.show(PAGE)?;
    tracing::info!(window = %window.id(), shown = window.is_shown(), "page is up");

    // In production the engine delivers these from its own threads; the
    // stub lets us press the buttons from here.
    let click = EventKind::Callback.as_raw();
    for (element, payload, event) in [
        ("increment", "", 1),
        ("increment", "10", 2),
        ("reset", "", 3),
        ("increment", "", 4),
    ] {
        let outcome = bridge.dispatch_event(
            window.id(),
            click,
            element,
            Payload::new(payload),
            EventNumber::from_raw(event),
        );
        tracing::info!(element, ?outcome, "button pressed");
    }
    tracing::info!(count = count.load(Ordering::SeqCst), "counter state");

    let title = window.eval_script(
        "document.title",
        ScriptOptions {
            timeout: Duration::from_secs(5),
            ..ScriptOptions::default()
        },
    )?;
    tracing::info!(title = %title, "synchronous script result");

    // Arbitrary text is base64-wrapped so quotes and tags cannot break
    // the generated script.
    let status = "All systems <go>";
    window.run_script(&format!(
        "document.getElementById('status').textContent = atob('{}')",
        encode_embed(status)
    ));

    bridge.exit();
    bridge.wait();
    Ok(())
}

// =============================================================================
// STUB ENGINE
// =============================================================================

/// Minimal in-process [`Engine`] with just enough behavior for the demo:
/// stable per-element bind ids, logged responses, and canned script
/// results.
#[derive(Default)]
struct StubEngine {
    next_window: AtomicU64,
    next_bind: AtomicU32,
    bindings: Mutex<HashMap<(WindowId, String), BindId>>,
    shown: Mutex<HashSet<WindowId>>,
}

impl Engine for StubEngine {
    fn create_window(&self) -> WindowId {
        WindowId::from_raw(self.next_window.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn bind(&self, window: WindowId, element: &str) -> Result<BindId, BindError> {
        let mut bindings = self.bindings.lock().expect("bindings lock");
        let id = *bindings
            .entry((window, element.to_string()))
            .or_insert_with(|| BindId::from_raw(self.next_bind.fetch_add(1, Ordering::SeqCst) + 1));
        Ok(id)
    }

    fn bound_id(&self, window: WindowId, element: &str) -> Option<BindId> {
        self.bindings
            .lock()
            .expect("bindings lock")
            .get(&(window, element.to_string()))
            .copied()
    }

    fn set_event_response(&self, window: WindowId, event: EventNumber, body: &str) {
        tracing::info!(%window, %event, body, "response delivered to the browser side");
    }

    fn run_script(
        &self,
        _window: WindowId,
        script: &str,
        _timeout_secs: u64,
        out: &mut [u8],
    ) -> bool {
        // The only synchronous script the demo runs reads the title.
        let result: &[u8] = if script.contains("document.title") {
            b"Counter"
        } else {
            b"undefined"
        };
        if out.is_empty() {
            return false;
        }
        let n = result.len().min(out.len() - 1);
        out[..n].copy_from_slice(&result[..n]);
        out[n] = 0;
        true
    }

    fn run_script_detached(&self, window: WindowId, script: &str) {
        tracing::info!(%window, script, "script queued for the page");
    }

    fn show(&self, window: WindowId, content: &str) -> bool {
        tracing::info!(%window, content_len = content.len(), "window shown");
        self.shown.lock().expect("shown lock").insert(window);
        true
    }

    fn show_with_browser(&self, window: WindowId, content: &str, browser: BrowserKind) -> bool {
        tracing::info!(%window, ?browser, content_len = content.len(), "window shown");
        self.shown.lock().expect("shown lock").insert(window);
        true
    }

    fn is_shown(&self, window: WindowId) -> bool {
        self.shown.lock().expect("shown lock").contains(&window)
    }

    fn close(&self, window: WindowId) {
        self.shown.lock().expect("shown lock").remove(&window);
    }

    fn set_multi_access(&self, window: WindowId, allow: bool) {
        tracing::debug!(%window, allow, "multi-access updated");
    }

    fn set_runtime(&self, window: WindowId, runtime: RuntimeKind) {
        tracing::debug!(%window, ?runtime, "runtime selected");
    }

    fn set_startup_timeout(&self, timeout: Duration) {
        tracing::debug!(secs = timeout.as_secs(), "startup timeout set");
    }

    fn exit_all(&self) {
        self.shown.lock().expect("shown lock").clear();
    }

    fn wait_all(&self) {
        // Every window is already closed once exit_all ran.
    }
}
