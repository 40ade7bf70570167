// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, error};

/// Malformed input. On the greeting path these are logged and recovered,
/// never returned to the caller.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to deserialize JSON: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid body: expected a JSON string, got {actual}")]
    InvalidBody { actual: &'static str },

    #[error("Invalid body: expected a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    #[error("Invalid name: expected a string, got {actual}")]
    InvalidName { actual: &'static str },
}

#[derive(Error, Debug)]
#[error("Internal server error")]
pub struct ServerError(#[from] anyhow::Error);

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

impl axum::response::IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::Client(err) => {
                debug!("Client error: {err}");
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            HandlerError::Server(err) => {
                error!("Internal server error: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_client_error_is_bad_request() {
        let err: HandlerError = ClientError::InvalidName { actual: "number" }.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_error_is_internal() {
        let err: HandlerError = ServerError::from(anyhow::anyhow!("boom")).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!(null)), "null");
        assert_eq!(json_kind(&serde_json::json!(1)), "number");
        assert_eq!(json_kind(&serde_json::json!([1, 2])), "array");
        assert_eq!(json_kind(&serde_json::json!({"nome": "Ana"})), "object");
    }
}
