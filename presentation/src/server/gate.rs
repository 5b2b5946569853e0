//! Session/access gate middleware
//!
//! Runs before routing. Requests for protected paths without an accepted
//! session are answered with `307` to the sign-in route, carrying the original
//! target as `callbackUrl`.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use persona_application::SessionVerifier;
use persona_domain::{AccessDecision, AccessPolicy};
use std::sync::Arc;
use tracing::debug;

pub struct AccessGate {
    policy: AccessPolicy,
    verifier: Arc<dyn SessionVerifier>,
    cookie_name: String,
}

impl AccessGate {
    pub fn new(
        policy: AccessPolicy,
        verifier: Arc<dyn SessionVerifier>,
        cookie_name: impl Into<String>,
    ) -> Self {
        Self {
            policy,
            verifier,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Session token from the session cookie, else from a bearer token.
    pub fn session_token(&self, headers: &HeaderMap) -> Option<String> {
        self.cookie_token(headers).or_else(|| bearer_token(headers))
    }

    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        self.session_token(headers)
            .is_some_and(|token| self.verifier.verify(&token))
    }

    pub fn decide(&self, target: &str, headers: &HeaderMap) -> AccessDecision {
        let path = target.split('?').next().unwrap_or(target);
        if !self.policy.is_protected(path) {
            return AccessDecision::Allow;
        }
        self.policy.decide(target, self.is_authenticated(headers))
    }

    fn cookie_token(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie_name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Middleware entry point.
pub async fn access_gate(
    State(gate): State<Arc<AccessGate>>,
    request: Request,
    next: Next,
) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    match gate.decide(&target, request.headers()) {
        AccessDecision::Allow => next.run(request).await,
        AccessDecision::RedirectToSignIn { location } => {
            debug!("Redirecting unauthenticated request for {}", target);
            Redirect::temporary(&location).into_response()
        }
    }
}
