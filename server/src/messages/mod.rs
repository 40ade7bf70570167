// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Request and response messages

use std::collections::BTreeMap;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{CONTENT_TYPE_JSON, DEFAULT_NAME};
use crate::errors::{ClientError, json_kind};

/// Incoming request envelope.
///
/// Only `body` is read. Anything else the host puts in the envelope
/// (headers, request context, ...) is ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Serialized JSON body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl RequestEnvelope {
    /// Envelope carrying `body` as its serialized body string.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(serde_json::Value::String(body.into())),
        }
    }

    /// Parse an envelope from raw bytes. Never fails: anything that is not a
    /// JSON object is treated as an envelope without a body.
    pub fn from_slice(raw: &[u8]) -> Self {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        match serde_json::from_slice::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Object(mut fields)) => Self {
                body: fields.remove("body").filter(|b| !b.is_null()),
            },
            Ok(other) => {
                warn!(kind = json_kind(&other), "Request envelope is not an object");
                Self::default()
            }
            Err(err) => {
                warn!("Failed to parse request envelope: {err}");
                Self::default()
            }
        }
    }
}

/// Greeting parameters given directly, e.g. as a query string.
#[derive(Debug, Default, Deserialize)]
pub struct GreetingRequest {
    pub nome: Option<String>,
}

impl GreetingRequest {
    /// Build from decoded query pairs, keeping the first `nome`.
    pub fn from_query<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            nome: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "nome").then_some(value)),
        }
    }
}

/// Greeting payload returned to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    /// `"<phrase>, <name>"`.
    pub mensagem: String,
    /// 1-based position of the phrase in the catalog.
    pub frase_id: u32,
    /// ISO-8601 UTC timestamp ending in `Z`.
    pub gerado_em: String,
}

/// Proxy-style handler result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    /// JSON-serialized [`Greeting`].
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl HandlerResponse {
    /// A 200 response carrying `body` as JSON.
    pub fn json_ok(body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned());
        Self {
            status_code: StatusCode::OK.as_u16(),
            body,
            headers,
        }
    }
}

impl axum::response::IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        let mut response = (status, self.body).into_response();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!(header = %name, "Dropping invalid response header"),
            }
        }
        response
    }
}

/// Extract the caller's name from the envelope.
///
/// A missing or empty body, or a body without `nome`, is not an error and
/// yields the default name. Errors are returned only for malformed input.
pub fn extract_name(envelope: &RequestEnvelope) -> Result<String, ClientError> {
    let raw = match &envelope.body {
        None | Some(serde_json::Value::Null) => return Ok(DEFAULT_NAME.to_owned()),
        Some(serde_json::Value::String(raw)) => raw,
        Some(other) => {
            return Err(ClientError::InvalidBody {
                actual: json_kind(other),
            });
        }
    };
    if raw.is_empty() {
        return Ok(DEFAULT_NAME.to_owned());
    }

    let mut fields = match serde_json::from_str::<serde_json::Value>(raw)? {
        serde_json::Value::Object(fields) => fields,
        other => {
            return Err(ClientError::NotAnObject {
                actual: json_kind(&other),
            });
        }
    };
    match fields.remove("nome") {
        None | Some(serde_json::Value::Null) => Ok(DEFAULT_NAME.to_owned()),
        Some(serde_json::Value::String(nome)) => Ok(nome),
        Some(other) => Err(ClientError::InvalidName {
            actual: json_kind(&other),
        }),
    }
}

/// Like [`extract_name`], but malformed input is logged and falls back to the
/// default name.
pub fn resolve_name(envelope: &RequestEnvelope) -> String {
    extract_name(envelope).unwrap_or_else(|err| {
        warn!("Failed to read name, using default: {err}");
        DEFAULT_NAME.to_owned()
    })
}
