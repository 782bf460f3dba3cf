//! Relay HTTP wire contract.
//!
//! Both sides of the handler speak JSON:
//! - `ChatRequest`  — caller → relay: a message plus an optional transcript
//! - `ChatEnvelope` — relay → caller: success or failure, always well-formed
//!
//! Transcript ordering is significant: array order is chronological order,
//! and the relay only ever appends.

use serde::{Deserialize, Serialize};

// ── CORS ─────────────────────────────────────────────────────────────────────

/// Header set attached to every response the relay produces, success and
/// failure alike. Browsers drop cross-origin replies that lack these, so an
/// error response without them is indistinguishable from no response at all.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    (
        "access-control-allow-headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
    ("access-control-allow-methods", "OPTIONS,POST"),
];

// ── Transcript ───────────────────────────────────────────────────────────────

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// One exchange in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ── Request / response envelopes ─────────────────────────────────────────────

/// Inbound body for `POST /chat`.
///
/// `message` is required; an omitted `conversationHistory` is an empty
/// transcript, not an error. The caller owns the transcript across
/// invocations and supplies the full history each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<ConversationTurn>,
}

/// Outbound body for every invocation outcome.
///
/// Exactly one of the two shapes is ever produced:
/// `{success:true, response, conversationHistory}` or
/// `{success:false, error}` — never a partial mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(
        rename = "conversationHistory",
        skip_serializing_if = "Option::is_none"
    )]
    pub conversation_history: Option<Vec<ConversationTurn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatEnvelope {
    pub fn success(response: impl Into<String>, history: Vec<ConversationTurn>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            conversation_history: Some(history),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            conversation_history: None,
            error: Some(error.into()),
        }
    }
}
