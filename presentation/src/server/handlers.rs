//! Route handlers

use super::error::ApiError;
use super::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use persona_domain::util::preview;
use persona_domain::{
    ChatMessage, ChatRequest, ChatSummary, Persona, PersonaDetail, PersonaId, PricingTier,
    validate,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

/// `GET /api/personas`
pub async fn list_personas(State(state): State<AppState>) -> Result<Json<Vec<Persona>>, ApiError> {
    Ok(Json(state.directory.list().await?))
}

/// `GET /api/personas/:id`
pub async fn get_persona(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PersonaDetail>, ApiError> {
    let id: PersonaId = raw_id.parse().map_err(|_| ApiError::invalid_persona_id())?;
    Ok(Json(state.directory.get(id).await?))
}

/// `POST /api/chat`
///
/// The body is decoded by hand so that every malformed payload (not JSON,
/// wrong shape, bad `persona_id`) gets the same 400.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatMessage>, ApiError> {
    let request: ChatRequest = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|value| validate(value).ok())
        .ok_or_else(ApiError::invalid_request)?;

    info!(
        "Received message \"{}\" for persona {}",
        preview(&request.message, 60),
        request.persona_id
    );
    let reply = state
        .replies
        .reply(request.persona_id, &request.message)
        .await?;
    debug!("Replying with \"{}\"", preview(&reply.content, 60));
    Ok(Json(reply))
}

/// `GET /api/user/chats/summary`
pub async fn chat_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatSummary>>, ApiError> {
    Ok(Json(state.summaries.recent_chats().await?))
}

/// `GET /api/pricing`
pub async fn pricing(State(state): State<AppState>) -> Result<Json<Vec<PricingTier>>, ApiError> {
    Ok(Json(state.pricing.tiers().await?))
}

#[derive(Debug, Deserialize)]
pub struct SignInQuery {
    #[serde(rename = "callbackUrl")]
    callback_url: Option<String>,
}

/// `GET /auth/signin`
///
/// Session issuance happens elsewhere; this only tells the client where to
/// return afterwards.
pub async fn sign_in(Query(query): Query<SignInQuery>) -> Json<Value> {
    let callback = query
        .callback_url
        .filter(|url| url.starts_with('/'))
        .unwrap_or_else(|| "/dashboard".to_string());
    Json(json!({
        "message": "Sign in required",
        "callbackUrl": callback,
    }))
}

/// `GET /healthz`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
