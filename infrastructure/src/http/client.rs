//! HTTP adapter for the persona-chat API
//!
//! [`HttpApiClient`] implements the read-only catalog ports and
//! [`ReplyService`] against a running server. Every response body is
//! validated into domain types before it is returned.

use async_trait::async_trait;
use persona_application::ports::persona_directory::{
    ChatSummarySource, DirectoryError, PersonaDirectory, PricingCatalog,
};
use persona_application::ports::reply_service::{ReplyError, ReplyService};
use persona_domain::core::validation::{Validated, validate, validate_list};
use persona_domain::{
    ChatMessage, ChatRequest, ChatSummary, Persona, PersonaDetail, PersonaId, PricingTier, Role,
    ValidationError,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::debug;

pub struct HttpApiClient {
    client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl HttpApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// Redirects are not followed: a redirect to the sign-in page means the
    /// session was rejected.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json(&self, path: &str) -> Result<(StatusCode, Value), DirectoryError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status.is_redirection() {
            return Err(DirectoryError::Unauthorized);
        }
        let body = read_body(response)
            .await
            .map_err(DirectoryError::Transport)?;
        Ok((status, body))
    }

    async fn get_list<T: Validated>(&self, path: &str) -> Result<Vec<T>, DirectoryError> {
        let (status, body) = self.get_json(path).await?;
        if !status.is_success() {
            return Err(DirectoryError::Transport(describe(status, &body)));
        }
        Ok(validate_list(body)?)
    }
}

async fn read_body(response: Response) -> Result<Value, String> {
    let text = response.text().await.map_err(|e| e.to_string())?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| format!("malformed JSON body: {}", e))
}

/// `{"error": "..."}` message, or the status line.
fn error_message(status: StatusCode, body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

fn describe(status: StatusCode, body: &Value) -> String {
    format!("HTTP {}: {}", status.as_u16(), error_message(status, body))
}

#[async_trait]
impl PersonaDirectory for HttpApiClient {
    async fn list(&self) -> Result<Vec<Persona>, DirectoryError> {
        self.get_list("/api/personas").await
    }

    async fn get(&self, id: PersonaId) -> Result<PersonaDetail, DirectoryError> {
        let (status, body) = self.get_json(&format!("/api/personas/{}", id)).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(id));
        }
        if !status.is_success() {
            return Err(DirectoryError::Transport(describe(status, &body)));
        }
        Ok(validate(body)?)
    }
}

#[async_trait]
impl ChatSummarySource for HttpApiClient {
    async fn recent_chats(&self) -> Result<Vec<ChatSummary>, DirectoryError> {
        self.get_list("/api/user/chats/summary").await
    }
}

#[async_trait]
impl PricingCatalog for HttpApiClient {
    async fn tiers(&self) -> Result<Vec<PricingTier>, DirectoryError> {
        self.get_list("/api/pricing").await
    }
}

#[async_trait]
impl ReplyService for HttpApiClient {
    async fn reply(&self, persona: PersonaId, text: &str) -> Result<ChatMessage, ReplyError> {
        let url = self.url("/api/chat");
        debug!("POST {} (persona {})", url, persona);
        let response = self
            .authorize(self.client.post(&url))
            .json(&ChatRequest::new(persona, text))
            .send()
            .await
            .map_err(|e| ReplyError::Transport(e.to_string()))?;

        let status = response.status();
        let body = read_body(response).await.map_err(ReplyError::Transport)?;
        if !status.is_success() {
            return Err(ReplyError::Rejected {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let message: ChatMessage = validate(body)?;
        if message.role != Role::Assistant {
            return Err(ValidationError::new(
                ChatMessage::SUBJECT,
                format!("expected an assistant reply, got role '{}'", message.role.as_str()),
            )
            .into());
        }
        Ok(message)
    }
}
