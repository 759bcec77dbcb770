//! Callback return values sent back to the browser side.

use serde::ser::Error;

/// Value a bound handler returns for the browser-side call that raised the
/// event.
///
/// [`Reply::None`] sends no response at all; the browser side never sees a
/// result for that call. An explicit JSON `null` is
/// `Reply::Json(serde_json::Value::Null)` and does produce a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Send nothing back.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Arbitrary structured data, forwarded as its JSON encoding.
    Json(serde_json::Value),
}

impl Reply {
    /// Serialize for the wire. `Ok(None)` means "send no response".
    ///
    /// The only unserializable reply is a non-finite float, which JSON has
    /// no representation for.
    pub fn into_response_body(self) -> Result<Option<String>, serde_json::Error> {
        let value = match self {
            Reply::None => return Ok(None),
            Reply::Bool(b) => serde_json::Value::Bool(b),
            Reply::Int(i) => serde_json::Value::from(i),
            Reply::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| serde_json::Error::custom(format!("non-finite float {f}")))?,
            Reply::Text(s) => serde_json::Value::String(s),
            Reply::Json(v) => v,
        };
        serde_json::to_string(&value).map(Some)
    }
}

impl From<bool> for Reply {
    fn from(v: bool) -> Self {
        Reply::Bool(v)
    }
}

impl From<i64> for Reply {
    fn from(v: i64) -> Self {
        Reply::Int(v)
    }
}

impl From<f64> for Reply {
    fn from(v: f64) -> Self {
        Reply::Float(v)
    }
}

impl From<&str> for Reply {
    fn from(v: &str) -> Self {
        Reply::Text(v.to_string())
    }
}

impl From<String> for Reply {
    fn from(v: String) -> Self {
        Reply::Text(v)
    }
}

impl From<serde_json::Value> for Reply {
    fn from(v: serde_json::Value) -> Self {
        Reply::Json(v)
    }
}
