//! Synchronous script execution against an engine window.

use std::time::Duration;

use tracing::{debug, warn};

use oriel_common::{ScriptError, WindowId};
use oriel_config::ScriptDefaults;

use crate::engine::Engine;

/// Response buffer size used when the caller passes capacity 0.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Tuning for one synchronous script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptOptions {
    /// How long to wait for the result. `Duration::ZERO` waits forever.
    /// The engine's resolution is whole seconds; nonzero sub-second
    /// timeouts round up to one second.
    pub timeout: Duration,
    /// Response buffer size in bytes. The result is truncated to one byte
    /// less, leaving room for the terminator. 0 uses
    /// [`DEFAULT_BUFFER_CAPACITY`].
    pub buffer_capacity: usize,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::ZERO,
            buffer_capacity: 0,
        }
    }
}

impl From<&ScriptDefaults> for ScriptOptions {
    fn from(defaults: &ScriptDefaults) -> Self {
        Self {
            timeout: Duration::from_secs(defaults.timeout_secs),
            buffer_capacity: defaults.buffer_capacity,
        }
    }
}

/// Run `script` in `window` and block for its result.
pub(crate) fn eval(
    engine: &dyn Engine,
    window: WindowId,
    script: &str,
    options: ScriptOptions,
) -> Result<String, ScriptError> {
    let capacity = if options.buffer_capacity == 0 {
        DEFAULT_BUFFER_CAPACITY
    } else {
        options.buffer_capacity
    };
    let timeout_secs = match options.timeout.as_secs() {
        0 if !options.timeout.is_zero() => 1,
        secs => secs,
    };

    debug!(
        %window,
        script_len = script.len(),
        timeout_secs,
        capacity,
        "script dispatched"
    );

    let mut buf = vec![0u8; capacity];
    let ok = engine.run_script(window, script, timeout_secs, &mut buf);
    let text = take_response(window, &buf);

    if ok {
        Ok(text)
    } else {
        Err(ScriptError::Failed { partial: text })
    }
}

/// Text up to the first NUL. The engine always terminates its write; a
/// buffer with no terminator is a contract breach and is taken whole.
fn take_response(window: WindowId, buf: &[u8]) -> String {
    let end = match buf.iter().position(|&b| b == 0) {
        Some(end) => end,
        None => {
            warn!(
                %window,
                capacity = buf.len(),
                "script response has no terminator, taking whole buffer"
            );
            buf.len()
        }
    };
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
