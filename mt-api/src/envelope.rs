//! Response envelope parsing.
//!
//! Every Data API response body is a JSON object. A dictionary-valued
//! top-level `error` key marks a failure regardless of the HTTP status:
//! ```json
//! { "error": { "code": 401, "message": "Unauthorized" } }
//! ```
//! Anything else is a success payload, either a single resource or a list
//! shaped as `{ "totalResults": 12, "items": [ ... ] }`.

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mt_core::error::{MtError, MtResult};

/// Prefix that marks an error payload on the text export endpoints.
const ERROR_PREFIX: &[u8] = b"{\"error\":";

/// Server error detail from an `error` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code, normalized to a string (the server usually sends a number).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorBody {
    fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        Self {
            code: map.get("code").map(scalar_to_string).unwrap_or_default(),
            message: map.get("message").map(scalar_to_string).unwrap_or_default(),
        }
    }
}

impl From<ErrorBody> for MtError {
    fn from(body: ErrorBody) -> Self {
        MtError::api(body.code, body.message)
    }
}

/// A parsed response: either the success payload or the server's error.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(Value),
    Failure(ErrorBody),
}

impl Envelope {
    /// Classify an already-parsed JSON document.
    pub fn from_value(value: Value) -> Self {
        if let Some(Value::Object(error)) = value.get("error") {
            return Envelope::Failure(ErrorBody::from_map(error));
        }
        Envelope::Success(value)
    }

    /// Parse raw response bytes. A body that is not JSON is a transport failure.
    pub fn from_slice(bytes: &[u8]) -> MtResult<Self> {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Ok(Self::from_value(value)),
            Err(e) => {
                tracing::warn!("response body is not JSON: {e}");
                Err(MtError::transport())
            }
        }
    }

    /// Collapse into the single result every operation returns.
    pub fn into_result(self) -> MtResult<Value> {
        match self {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(body) => Err(body.into()),
        }
    }

    /// Whether this is a failure envelope.
    pub fn is_failure(&self) -> bool {
        matches!(self, Envelope::Failure(_))
    }

    /// Whether an export body is a JSON error envelope rather than text.
    pub fn is_error_text(bytes: &[u8]) -> bool {
        bytes.starts_with(ERROR_PREFIX)
    }

    /// Interpret the body of a text export endpoint.
    ///
    /// The server reuses those endpoints for JSON error envelopes, so a body
    /// starting with `{"error":` is parsed as one before anything is decoded
    /// as text.
    pub fn sniff_text(bytes: &[u8], encoding: &'static Encoding) -> MtResult<String> {
        if Self::is_error_text(bytes) {
            return match Self::from_slice(bytes)? {
                Envelope::Failure(body) => Err(body.into()),
                Envelope::Success(_) => Err(MtError::transport()),
            };
        }
        let (text, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            tracing::debug!("export body had bytes invalid in {}", encoding.name());
        }
        Ok(text.into_owned())
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    /// The `items` array, empty when absent.
    pub items: Vec<Value>,
    /// The `totalResults` count, zero when absent.
    pub total: i64,
}

impl ListPage {
    /// Project a success payload into its list fields.
    pub fn from_value(value: &Value) -> Self {
        let items = value
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let total = value.get("totalResults").map(scalar_to_i64).unwrap_or(0);
        Self { items, total }
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Render a JSON scalar the way the server's string fields read.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn scalar_to_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
