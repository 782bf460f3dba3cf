//! Outbound inference collaborator.
//!
//! Owns everything on the far side of the relay: the [`TextGenerator`] seam
//! the mediator calls through, the HTTP client that implements it against a
//! remote text-generation endpoint, environment-level configuration, and the
//! region annotation helper.

pub mod client;
pub mod config;
pub mod error;
pub mod region;

pub use {
    client::{GenerationRequest, HttpInferenceClient, TextGenerator},
    config::InferenceConfig,
    error::{Error, Result},
    region::{DEFAULT_REGION, extract_region},
};
