//! Error bodies emitted by the backend.
//!
//! Request validation failures (422) carry a list of field-level entries,
//! while explicit rejections (400/404) carry a single message. Both arrive
//! under a `detail` key, so [`ErrorDetail`] is untagged.

use serde::Deserialize;
use serde_json::Value;

/// Text shown when the backend sent an error body without a usable message.
pub const NO_DETAIL: &str = "Sin detalles adicionales";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Validation(Vec<ValidationDetail>),
    Message(String),
}

/// One field-level entry of a validation error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(default)]
    pub input: Value,
}

impl ErrorBody {
    /// Parses an error body, returning `None` when `body` is not one of the
    /// backend error shapes.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The message worth showing to a user: the first validation message, or
    /// the exception text.
    pub fn summary(&self) -> String {
        match &self.detail {
            ErrorDetail::Validation(entries) => entries
                .first()
                .map(|entry| entry.msg.clone())
                .unwrap_or_else(|| NO_DETAIL.to_string()),
            ErrorDetail::Message(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_first_validation_message() {
        let body = r#"{"detail":[
            {"type":"int_parsing","loc":["query","hora"],"msg":"Input should be a valid integer","input":"x"},
            {"type":"missing","loc":["query","tel"],"msg":"Field required","input":null}
        ]}"#;

        let parsed = ErrorBody::parse(body).unwrap();

        assert_eq!(parsed.summary(), "Input should be a valid integer");
    }

    #[test]
    fn summary_uses_exception_message() {
        let parsed = ErrorBody::parse(r#"{"detail":"No se encontró ninguna cancha con la ID: 9"}"#).unwrap();
        assert_eq!(parsed.summary(), "No se encontró ninguna cancha con la ID: 9");
    }

    #[test]
    fn empty_validation_list_falls_back() {
        let parsed = ErrorBody::parse(r#"{"detail":[]}"#).unwrap();
        assert_eq!(parsed.summary(), NO_DETAIL);
    }

    #[test]
    fn non_error_bodies_are_ignored() {
        assert!(ErrorBody::parse(r#"{"id": 3}"#).is_none());
        assert!(ErrorBody::parse("Internal Server Error").is_none());
    }
}
