// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Greeting handler
//!
//! Resolves the caller's name, picks a phrase from the catalog and returns
//! `{"mensagem", "frase_id", "gerado_em"}`. Malformed input never fails the
//! request; it degrades to the default name.

use anyhow::Context;
use axum::Json;
use axum::body::Bytes;
use axum::extract::Query;
use rand::Rng;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use crate::HandlerError;
use crate::catalog::{phrase_id, pick_phrase};
use crate::constants::NAME_SEPARATOR;
use crate::errors::ServerError;
use crate::messages::{Greeting, GreetingRequest, HandlerResponse, RequestEnvelope, resolve_name};
use crate::timestamp::iso_utc_now;

/// Handle one request envelope.
pub fn handle(envelope: &RequestEnvelope) -> Result<HandlerResponse, HandlerError> {
    handle_with_rng(envelope, &mut rand::thread_rng())
}

/// Handle one request envelope, drawing the phrase from `rng`.
pub fn handle_with_rng<R: Rng + ?Sized>(
    envelope: &RequestEnvelope,
    rng: &mut R,
) -> Result<HandlerResponse, HandlerError> {
    debug!(?envelope, "Handling request");

    let nome = resolve_name(envelope);
    let greeting = build_greeting(&nome, rng);
    debug!(frase_id = greeting.frase_id, %nome, "Greeting built");

    let body = serde_json::to_string(&greeting)
        .context("Failed to serialize greeting")
        .map_err(ServerError::from)?;
    Ok(HandlerResponse::json_ok(body))
}

fn build_greeting<R: Rng + ?Sized>(nome: &str, rng: &mut R) -> Greeting {
    let (index, phrase) = pick_phrase(rng);
    Greeting {
        mensagem: format!("{phrase}{NAME_SEPARATOR}{nome}"),
        frase_id: phrase_id(index),
        gerado_em: iso_utc_now(),
    }
}

/// HTTP handler taking a whole request envelope, returning the handler result
/// itself as JSON.
pub async fn invoke_http(raw: Bytes) -> Result<Json<HandlerResponse>, HandlerError> {
    let span = info_span!("invoke", request_id = %Uuid::new_v4());
    async move {
        info!(raw = %String::from_utf8_lossy(&raw), "Received request");
        let envelope = RequestEnvelope::from_slice(&raw);
        handle(&envelope).map(Json)
    }
    .instrument(span)
    .await
}

/// HTTP handler taking the request body directly, e.g. `{"nome": "Ana"}`.
pub async fn greeting_http(raw: Bytes) -> Result<HandlerResponse, HandlerError> {
    let span = info_span!("greeting", request_id = %Uuid::new_v4());
    async move {
        let body = String::from_utf8_lossy(&raw);
        info!(raw = %body, "Received request");
        let envelope = RequestEnvelope::with_body(body);
        handle(&envelope)
    }
    .instrument(span)
    .await
}

/// HTTP handler taking the name from the query string. Only the first `nome`
/// counts; other parameters are ignored.
pub async fn greeting_query_http(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<HandlerResponse, HandlerError> {
    let span = info_span!("greeting_query", request_id = %Uuid::new_v4());
    async move {
        info!(query = ?pairs, "Received request");
        let request = GreetingRequest::from_query(pairs);
        let envelope = match request.nome {
            Some(nome) => {
                RequestEnvelope::with_body(serde_json::json!({ "nome": nome }).to_string())
            }
            None => RequestEnvelope::default(),
        };
        handle(&envelope)
    }
    .instrument(span)
    .await
}
