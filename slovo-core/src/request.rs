//! Request validation
//!
//! Both endpoints take `{"text": "..."}`. Validation happens before any
//! processing and yields either a [`TextRequest`] or an [`InputError`].

use crate::error::InputError;
use serde_json::Value;

/// A validated request carrying non-empty text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
    text: String,
}

impl TextRequest {
    /// Create a request directly from text
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text = text.into();
        if text.is_empty() {
            return Err(InputError::NoText);
        }
        Ok(Self { text })
    }

    /// Validate a raw request body
    pub fn from_bytes(body: &[u8]) -> Result<Self, InputError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| InputError::MalformedJson(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Validate a parsed JSON body
    ///
    /// A missing `text` and any falsy value (`null`, `""`, `false`, `0`,
    /// `[]`, `{}`) are all treated as "no text".
    pub fn from_json(body: &Value) -> Result<Self, InputError> {
        let object = body.as_object().ok_or(InputError::NotAnObject)?;

        match object.get("text") {
            None => Err(InputError::NoText),
            Some(value) if is_falsy(value) => Err(InputError::NoText),
            Some(Value::String(text)) => Ok(Self { text: text.clone() }),
            Some(other) => Err(InputError::NotAString {
                found: type_name(other),
            }),
        }
    }

    /// The validated text
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
