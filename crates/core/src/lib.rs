//! Domain model for the multiplier content-marketing assistant.
//!
//! This crate holds the pure domain logic shared by the API service and its
//! collaborator clients: the seven-platform content model, the content
//! lifecycle state machine, calendar bucketing, image candidate handling,
//! briefing validation, and the default settings documents.
//!
//! It deliberately has zero internal dependencies so every other workspace
//! crate can build on it.

pub mod briefing;
pub mod calendar;
pub mod content;
pub mod error;
pub mod image;
pub mod lifecycle;
pub mod platform;
pub mod settings;

pub use error::CoreError;
