//! HTTP client for the generative-AI collaborators.
//!
//! The service talks to two opaque endpoints: a text generator that turns a
//! briefing into the seven-platform response shape, and an image generator
//! that turns a free-text prompt into a set of candidate image references.
//! This crate owns the wire contract ([`schema`]), the prompt assembly
//! ([`prompt`]), the transport ([`client`]), and the deterministic mapping
//! of a generation response into a content batch ([`batch`]).

pub mod batch;
pub mod client;
pub mod error;
pub mod prompt;
pub mod schema;

pub use client::GenAiClient;
pub use error::GenAiError;
pub use schema::GenerationResponse;
