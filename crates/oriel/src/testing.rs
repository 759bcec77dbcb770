//! In-process engine double used by the crate's tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use oriel_common::{BindError, BindId, BrowserKind, EventNumber, RuntimeKind, WindowId};

use crate::engine::Engine;

/// Scripted, recording implementation of [`Engine`].
///
/// Bind ids are minted per window starting at 1 and are stable per
/// element, matching the engine contract. Script runs consume queued
/// `(text, ok)` results and honor the truncate-and-terminate buffer
/// contract. Everything the bridge sends is recorded for assertions.
#[derive(Default)]
pub(crate) struct FakeEngine {
    next_window: AtomicU64,
    next_bind: Mutex<HashMap<WindowId, u32>>,
    bindings: Mutex<HashMap<(WindowId, String), BindId>>,
    reject_binds: AtomicBool,
    fail_shows: AtomicBool,
    no_terminator: AtomicBool,
    script_results: Mutex<VecDeque<(String, bool)>>,

    pub responses: Mutex<Vec<(WindowId, EventNumber, String)>>,
    /// `(window, script, timeout_secs, buffer capacity)` per blocking run.
    pub script_log: Mutex<Vec<(WindowId, String, u64, usize)>>,
    pub detached_log: Mutex<Vec<(WindowId, String)>>,
    pub shows: Mutex<Vec<(WindowId, String, Option<BrowserKind>)>>,
    pub shown: Mutex<HashSet<WindowId>>,
    pub multi_access: Mutex<Vec<(WindowId, bool)>>,
    pub runtimes: Mutex<Vec<(WindowId, RuntimeKind)>>,
    pub startup_timeouts: Mutex<Vec<Duration>>,
    pub exited: AtomicBool,
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the result of the next blocking script run.
    pub fn queue_script_result(&self, text: &str, ok: bool) {
        self.script_results
            .lock()
            .push_back((text.to_string(), ok));
    }

    /// Make every subsequent bind fail, as on a closed window.
    pub fn reject_binds(&self) {
        self.reject_binds.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent show report failure.
    pub fn fail_shows(&self) {
        self.fail_shows.store(true, Ordering::SeqCst);
    }

    /// Break the buffer contract: fill the response without a terminator.
    pub fn omit_terminator(&self) {
        self.no_terminator.store(true, Ordering::SeqCst);
    }
}

fn write_terminated(src: &[u8], out: &mut [u8]) {
    if out.is_empty() {
        return;
    }
    let n = src.len().min(out.len() - 1);
    out[..n].copy_from_slice(&src[..n]);
    out[n] = 0;
}

fn write_unterminated(src: &[u8], out: &mut [u8]) {
    let n = src.len().min(out.len());
    out[..n].copy_from_slice(&src[..n]);
}

impl Engine for FakeEngine {
    fn create_window(&self) -> WindowId {
        WindowId::from_raw(self.next_window.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn bind(&self, window: WindowId, element: &str) -> Result<BindId, BindError> {
        if self.reject_binds.load(Ordering::SeqCst) {
            return Err(BindError::Rejected {
                window,
                element: element.to_string(),
                reason: "window closed".into(),
            });
        }
        let mut bindings = self.bindings.lock();
        let id = *bindings
            .entry((window, element.to_string()))
            .or_insert_with(|| {
                let mut next = self.next_bind.lock();
                let counter = next.entry(window).or_insert(0);
                *counter += 1;
                BindId::from_raw(*counter)
            });
        Ok(id)
    }

    fn bound_id(&self, window: WindowId, element: &str) -> Option<BindId> {
        self.bindings
            .lock()
            .get(&(window, element.to_string()))
            .copied()
    }

    fn set_event_response(&self, window: WindowId, event: EventNumber, body: &str) {
        self.responses
            .lock()
            .push((window, event, body.to_string()));
    }

    fn run_script(
        &self,
        window: WindowId,
        script: &str,
        timeout_secs: u64,
        out: &mut [u8],
    ) -> bool {
        self.script_log
            .lock()
            .push((window, script.to_string(), timeout_secs, out.len()));

        let (text, ok) = self
            .script_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| (String::new(), true));

        if self.no_terminator.load(Ordering::SeqCst) {
            write_unterminated(text.as_bytes(), out);
        } else {
            write_terminated(text.as_bytes(), out);
        }
        ok
    }

    fn run_script_detached(&self, window: WindowId, script: &str) {
        self.detached_log
            .lock()
            .push((window, script.to_string()));
    }

    fn show(&self, window: WindowId, content: &str) -> bool {
        self.shows
            .lock()
            .push((window, content.to_string(), None));
        if self.fail_shows.load(Ordering::SeqCst) {
            return false;
        }
        self.shown.lock().insert(window);
        true
    }

    fn show_with_browser(&self, window: WindowId, content: &str, browser: BrowserKind) -> bool {
        self.shows
            .lock()
            .push((window, content.to_string(), Some(browser)));
        if self.fail_shows.load(Ordering::SeqCst) {
            return false;
        }
        self.shown.lock().insert(window);
        true
    }

    fn is_shown(&self, window: WindowId) -> bool {
        self.shown.lock().contains(&window)
    }

    fn close(&self, window: WindowId) {
        self.shown.lock().remove(&window);
    }

    fn set_multi_access(&self, window: WindowId, allow: bool) {
        self.multi_access.lock().push((window, allow));
    }

    fn set_runtime(&self, window: WindowId, runtime: RuntimeKind) {
        self.runtimes.lock().push((window, runtime));
    }

    fn set_startup_timeout(&self, timeout: Duration) {
        self.startup_timeouts.lock().push(timeout);
    }

    fn exit_all(&self) {
        self.shown.lock().clear();
        self.exited.store(true, Ordering::SeqCst);
    }

    fn wait_all(&self) {
        // Nothing blocks in the fake; all windows are "closed" on exit.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_ids_are_stable_per_element() {
        let engine = FakeEngine::new();
        let window = engine.create_window();

        let a = engine.bind(window, "submit").unwrap();
        let b = engine.bind(window, "cancel").unwrap();
        let again = engine.bind(window, "submit").unwrap();

        assert_ne!(a, b);
        assert_eq!(a, again);
        assert_eq!(engine.bound_id(window, "submit"), Some(a));
        assert_eq!(engine.bound_id(window, "ghost"), None);
    }

    #[test]
    fn script_buffer_is_truncated_and_terminated() {
        let mut out = [0xffu8; 6];
        write_terminated(b"abcdefgh", &mut out);
        assert_eq!(&out[..5], b"abcde");
        assert_eq!(out[5], 0);

        let mut exact = [0xffu8; 6];
        write_terminated(b"ab", &mut exact);
        assert_eq!(&exact[..2], b"ab");
        assert_eq!(exact[2], 0);
    }
}
