//! The single request/response mediation cycle.

use tracing::debug;

use {
    parrot_inference::TextGenerator,
    parrot_protocol::{ChatRequest, ConversationTurn},
};

use crate::error::{Error, Result};

/// Outcome of a successful mediation cycle.
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// The generated assistant text.
    pub response: String,
    /// `input history ++ [user turn] ++ [assistant turn]`, in that order.
    pub conversation_history: Vec<ConversationTurn>,
}

/// Run one call-and-respond cycle.
///
/// All-or-nothing: on any error the caller gets no transcript at all, so a
/// failed invocation can never leak a partially advanced history. Parsing
/// happens here rather than in the transport layer so that an unparseable
/// body is classified like every other failure instead of being rejected
/// upstream of the envelope contract.
pub async fn handle_turn(generator: &dyn TextGenerator, raw_body: &[u8]) -> Result<ChatReply> {
    let request: ChatRequest = serde_json::from_slice(raw_body)
        .map_err(|e| Error::Malformed(format!("invalid request body: {e}")))?;

    debug!(
        message = %request.message,
        history_len = request.conversation_history.len(),
        "handling chat turn"
    );

    let mut transcript = request.conversation_history;
    transcript.push(ConversationTurn::user(request.message.clone()));

    // Single-turn by design: only the latest message goes upstream as the
    // prompt. The transcript is extended locally and never forwarded.
    let response = generator.generate(&request.message).await?;

    transcript.push(ConversationTurn::assistant(response.clone()));

    Ok(ChatReply {
        response,
        conversation_history: transcript,
    })
}
