//! Request mediation core.
//!
//! One operation: take a raw inbound envelope, extend the transcript with the
//! user turn, obtain a generated reply through the [`TextGenerator`] seam,
//! extend the transcript with the assistant turn, and hand back the result.
//! Failures come out as an explicit [`Error`] with a taxonomy the transport
//! adapter maps onto the wire — there is no catch-all boundary in here.
//!
//! [`TextGenerator`]: parrot_inference::TextGenerator

pub mod error;
pub mod mediator;

pub use {
    error::{Error, ErrorKind, Result},
    mediator::{ChatReply, handle_turn},
};
