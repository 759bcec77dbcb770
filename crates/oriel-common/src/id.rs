use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an engine-owned window.
///
/// Minted by the engine when a window is created, unique for the life of
/// the process, and never reused while the window is alive. Application
/// code treats it as opaque; `from_raw`/`as_raw` exist for engine adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(u64);

impl WindowId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Identifier of one element binding, assigned by the engine at bind time.
///
/// Unique within its window only; two windows may both hand out id 1.
/// Stable for the lifetime of the binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindId(u32);

impl BindId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bind-{}", self.0)
    }
}

/// Correlation number the engine attaches to one browser-side call so the
/// eventual response can be matched to the caller that is awaiting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventNumber(u64);

impl EventNumber {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event-{}", self.0)
    }
}
