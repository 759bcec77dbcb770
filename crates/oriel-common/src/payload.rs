//! Typed access to event payloads and safe-string embedding.
//!
//! The browser side sends every payload as text; the accessors here
//! interpret it. The lossy accessors (`as_int`, `as_bool`) match the wire
//! contract handlers were written against: a payload that does not parse
//! is logged and read as the zero value. The strict `try_*` accessors are
//! for callers that must tell a bad payload from a literal zero.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::PayloadError;

/// Raw UTF-8 payload attached to a UI event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(String);

impl Payload {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The payload as sent, uninterpreted.
    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the payload as a signed integer, reading unparsable
    /// payloads as 0 (logged).
    pub fn as_int(&self) -> i64 {
        match self.try_int() {
            Ok(v) => v,
            Err(e) => {
                warn!(payload = %self.0, error = %e, "payload read as 0");
                0
            }
        }
    }

    /// Strict integer parse. No surrounding whitespace is accepted.
    pub fn try_int(&self) -> Result<i64, PayloadError> {
        self.0
            .parse::<i64>()
            .map_err(|_| PayloadError::NotAnInteger(self.0.clone()))
    }

    /// Interpret the payload as a boolean, reading unparsable payloads as
    /// false (logged).
    pub fn as_bool(&self) -> bool {
        match self.try_bool() {
            Ok(v) => v,
            Err(e) => {
                warn!(payload = %self.0, error = %e, "payload read as false");
                false
            }
        }
    }

    /// Strict boolean parse.
    ///
    /// Accepts the spellings the browser side may emit: `1`, `t`, `T`,
    /// `true`, `True`, `TRUE` and their false counterparts.
    pub fn try_bool(&self) -> Result<bool, PayloadError> {
        match self.0.as_str() {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
            _ => Err(PayloadError::NotABoolean(self.0.clone())),
        }
    }
}

impl From<&str> for Payload {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Payload {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Encode arbitrary text so it can be embedded in generated script or
/// markup without quoting or escaping hazards. Reversed by [`decode_embed`].
pub fn encode_embed(text: &str) -> String {
    B64.encode(text.as_bytes())
}

/// Decode text produced by [`encode_embed`].
pub fn decode_embed(text: &str) -> Result<String, PayloadError> {
    let bytes = B64
        .decode(text.as_bytes())
        .map_err(|e| PayloadError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PayloadError::Decode(e.to_string()))
}
