//! Decoding of raw JSON values into [`Location`].

use serde_json::Value;
use thiserror::Error;

use super::location_model::Location;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Failed to deserialize location symbol from {0} entry")]
    InvalidType(&'static str),

    #[error("Failed to deserialize location symbol. Unknown symbol {0} for location")]
    UnknownSymbol(String),
}

/// Decodes a location from a JSON value. Only strings are accepted.
pub fn decode_location(value: &Value) -> Result<Location, LocationError> {
    match value {
        Value::String(symbol) => symbol.parse(),
        other => Err(LocationError::InvalidType(json_type_name(other))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_string_symbol() {
        assert_eq!(decode_location(&json!("kraken")).unwrap(), Location::Kraken);
    }

    #[test]
    fn test_rejects_non_string_values() {
        let err = decode_location(&json!(55)).unwrap_err();
        assert_eq!(err, LocationError::InvalidType("int"));
        assert_eq!(
            err.to_string(),
            "Failed to deserialize location symbol from int entry"
        );
        assert_eq!(
            decode_location(&Value::Null).unwrap_err(),
            LocationError::InvalidType("null")
        );
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        assert_eq!(
            decode_location(&json!("foo")).unwrap_err(),
            LocationError::UnknownSymbol("foo".to_string())
        );
    }
}
