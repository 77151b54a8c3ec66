//! HTTP routes for the login flow.
//!
//! - `GET /` landing page
//! - `GET /login` redirect to the provider consent screen
//! - `GET /oauth2/callback` code exchange and claims page
//! - `GET /health` liveness probe

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use super::pages;
use crate::error::FlowError;
use crate::flow::{AuthExchangeFlow, CallbackParams};

/// Shared state for HTTP handlers.
#[derive(Debug)]
pub struct HttpState {
    pub flow: AuthExchangeFlow,
}

/// Create the HTTP router.
pub fn create_router(flow: AuthExchangeFlow) -> Router {
    let state = Arc::new(HttpState { flow });

    Router::new()
        .route("/", get(handle_index))
        .route("/login", get(handle_login))
        .route("/oauth2/callback", get(handle_callback))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "tripspark-auth",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /`
async fn handle_index() -> Html<String> {
    Html(pages::render_index_page())
}

/// `GET /login`
///
/// Redirect the browser to the provider with a 302.
async fn handle_login(State(state): State<Arc<HttpState>>) -> Response {
    match state.flow.authorization_url() {
        Ok(url) => {
            tracing::info!("Redirecting to provider for consent");
            (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response()
        }
        Err(err) => reject(err),
    }
}

/// `GET /oauth2/callback`
///
/// Exchange the code, resolve the ID token and render the claims.
async fn handle_callback(
    State(state): State<Arc<HttpState>>,
    Query(params): Query<CallbackParams>,
) -> Response {
    match state.flow.handle_callback(&params).await {
        Ok(claims) => {
            tracing::info!(sub = %claims.sub(), "User logged in");
            Html(pages::render_claims_page(&claims)).into_response()
        }
        Err(err) => reject(err),
    }
}

fn reject(err: FlowError) -> Response {
    tracing::warn!(kind = err.kind(), status = err.status_code().as_u16(), error = %err, "Login request failed");
    err.into_response()
}
