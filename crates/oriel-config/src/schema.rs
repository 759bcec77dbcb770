//! Bridge configuration schema.

use oriel_common::{BrowserKind, RuntimeKind};
use serde::{Deserialize, Serialize};

/// Top-level bridge configuration.
///
/// Controls engine startup, script execution defaults, and the defaults
/// applied to new windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Seconds the engine waits for a browser to connect when a window is
    /// first shown. 0 waits forever.
    pub startup_timeout_secs: u64,
    /// Browser to launch windows with.
    pub browser: BrowserKind,
    pub script: ScriptDefaults,
    pub window: WindowDefaults,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            startup_timeout_secs: 30,
            browser: BrowserKind::Any,
            script: ScriptDefaults::default(),
            window: WindowDefaults::default(),
        }
    }
}

/// Defaults for synchronous script execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScriptDefaults {
    /// Seconds to wait for a script result. 0 waits forever.
    pub timeout_secs: u64,
    /// Response buffer size in bytes. 0 uses the built-in 8 KiB default.
    pub buffer_capacity: usize,
}

/// Defaults applied to new windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WindowDefaults {
    /// Allow more than one browser client to attach to a window.
    pub multi_access: bool,
    /// Runtime for server-side `.js` / `.ts` files.
    pub runtime: RuntimeKind,
}

// =============================================================================
// Tests
// =============================================================================
