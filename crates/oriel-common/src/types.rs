use serde::{Deserialize, Serialize};

/// Browser the engine launches a window with.
///
/// Raw values are part of the engine ABI and must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum BrowserKind {
    /// Whatever the engine finds installed first.
    #[default]
    Any = 0,
    Chrome = 1,
    Firefox = 2,
    Edge = 3,
    Safari = 4,
    Chromium = 5,
    Opera = 6,
    Brave = 7,
    Vivaldi = 8,
    Epic = 9,
    Yandex = 10,
}

impl BrowserKind {
    /// Raw discriminant understood by the engine.
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Runtime the engine uses to serve `.js` / `.ts` files server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum RuntimeKind {
    /// Serve scripts as plain files.
    #[default]
    None = 0,
    Deno = 1,
    NodeJs = 2,
}

impl RuntimeKind {
    /// Raw discriminant understood by the engine.
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}
