//! UI event types delivered by the engine.

use serde::{Deserialize, Serialize};

use crate::id::WindowId;
use crate::payload::Payload;

/// Kind of UI interaction the engine is reporting.
///
/// Raw values are part of the engine ABI and must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The browser view lost its connection to the engine.
    Disconnected = 0,
    /// A browser view connected to the window.
    Connected = 1,
    /// An additional client attached to an already-connected window.
    MultiConnection = 2,
    /// A client was refused because multi-access is disabled.
    UnwantedConnection = 3,
    MouseClick = 4,
    /// The page is navigating to a new URL.
    Navigation = 5,
    /// A bound element fired and may expect a return value.
    Callback = 6,
}

impl EventKind {
    /// Decode the engine's raw event kind.
    ///
    /// `None` means the engine speaks a newer protocol revision than this
    /// enumeration; callers log the value and drop the event.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Disconnected),
            1 => Some(Self::Connected),
            2 => Some(Self::MultiConnection),
            3 => Some(Self::UnwantedConnection),
            4 => Some(Self::MouseClick),
            5 => Some(Self::Navigation),
            6 => Some(Self::Callback),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// One UI interaction, delivered to the handler bound to its element.
///
/// Built fresh for every dispatch and dropped when the handler returns.
/// Handlers that need the data afterwards copy it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Window the interaction happened in.
    pub window: WindowId,
    pub kind: EventKind,
    /// Name of the element that fired, empty for window-level events.
    pub element: String,
    /// Raw payload as sent by the browser side.
    pub payload: Payload,
}
