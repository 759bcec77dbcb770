pub mod errors;
pub mod events;
pub mod id;
pub mod payload;
pub mod reply;
pub mod types;

pub use errors::{BindError, ConfigError, OrielError, PayloadError, ScriptError};
pub use events::{Event, EventKind};
pub use id::{BindId, EventNumber, WindowId};
pub use payload::{decode_embed, encode_embed, Payload};
pub use reply::Reply;
pub use types::{BrowserKind, RuntimeKind};

pub type Result<T> = std::result::Result<T, OrielError>;
