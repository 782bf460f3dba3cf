use std::{net::SocketAddr, sync::Arc};

use {
    axum::{
        Router,
        body::Bytes,
        extract::State,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Json},
        routing::{get, post},
    },
    tracing::{debug, error, info},
};

use {
    parrot_inference::TextGenerator,
    parrot_protocol::{CORS_HEADERS, ChatEnvelope},
};

// ── Shared app state ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    /// Injected generation seam. Owned by the runtime that builds the app;
    /// the handlers hold no other state across invocations.
    pub generator: Arc<dyn TextGenerator>,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the relay router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler).options(preflight_handler))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "parrot gateway listening");
    axum::serve(listener, app).await
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// CORS preflight for `/chat`. The browser needs the header set before it
/// will issue the actual POST.
async fn preflight_handler() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, CORS_HEADERS)
}

/// One invocation: raw body in, envelope out.
///
/// The body is taken as raw bytes rather than through a JSON extractor so
/// that an unparseable payload still produces the contractual 500 envelope
/// with CORS headers instead of an extractor-shaped rejection.
async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    log_caller_identity(&headers);
    debug!(body_len = body.len(), "inbound chat envelope");

    match parrot_relay::handle_turn(state.generator.as_ref(), &body).await {
        Ok(reply) => (
            StatusCode::OK,
            CORS_HEADERS,
            Json(ChatEnvelope::success(
                reply.response,
                reply.conversation_history,
            )),
        ),
        Err(err) => {
            error!(kind = %err.kind(), %err, "chat turn failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CORS_HEADERS,
                Json(ChatEnvelope::failure(err.envelope_message())),
            )
        },
    }
}

/// Advisory only: an upstream authorizer may forward the verified identity.
/// Never required, never gates behaviour.
fn log_caller_identity(headers: &HeaderMap) {
    let identity = headers
        .get("x-user-email")
        .or_else(|| headers.get("x-user-name"))
        .and_then(|v| v.to_str().ok());
    if let Some(user) = identity {
        debug!(%user, "authenticated caller");
    }
}
