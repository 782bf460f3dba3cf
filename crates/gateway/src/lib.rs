//! HTTP transport adapter for the relay core.
//!
//! Maps the mediator's explicit result onto the wire contract: `Ok` becomes a
//! 200 success envelope, `Err` a 500 failure envelope, and every response —
//! both paths, plus preflight — carries the mandatory CORS header set.

pub mod server;

pub use server::{AppState, build_app, serve};
