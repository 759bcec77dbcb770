//! Bridge between Rust application code and a native browser-window engine.
//!
//! The engine owns windows, browsers, and page rendering; this crate owns
//! everything the application needs on top of it:
//! - binding element events to Rust handlers ([`Window::bind`])
//! - delivering engine events to those handlers and returning their
//!   replies to the browser side ([`Bridge::dispatch_event`])
//! - synchronous script execution with a bounded response buffer
//!   ([`Window::eval_script`])
//! - window lifecycle pass-throughs (show, close, multi-access, runtime)
//!
//! The engine itself is abstract: production code supplies an adapter over
//! the engine's C ABI implementing [`Engine`], tests use an in-process
//! fake. Handlers run on engine-owned threads; see [`registry::EventHandler`]
//! for what that requires of them.

pub mod bridge;
pub mod dispatch;
pub mod engine;
pub mod registry;
pub mod script;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::Bridge;
pub use dispatch::DispatchOutcome;
pub use engine::Engine;
pub use registry::{BindingRegistry, EventHandler};
pub use script::{DEFAULT_BUFFER_CAPACITY, ScriptOptions};
pub use window::Window;

// Re-export the shared types handlers and adapters work with.
pub use oriel_common::{
    decode_embed, encode_embed, BindError, BindId, BrowserKind, Event, EventKind, EventNumber,
    OrielError, Payload, Reply, RuntimeKind, ScriptError, WindowId,
};
pub use oriel_config::{BridgeConfig, ScriptDefaults, WindowDefaults};
