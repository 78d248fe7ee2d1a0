//! Settings persistence for the multiplier service.
//!
//! Four independent JSON documents (personas, prompt instructions, author
//! profile, automation target) are persisted under fixed keys and reloaded
//! at startup with defensive parsing: anything absent, corrupt, or
//! schema-stale falls back to (or is merged with) the compiled-in defaults
//! and is logged, never surfaced as an error.
//!
//! The storage medium is an injectable [`StorageBackend`]; production uses
//! one JSON file per key, tests use an in-memory map.

pub mod backend;
pub mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use store::{
    Settings, SettingsStore, KEY_AUTOMATION, KEY_PERSONAS, KEY_PROMPTS, KEY_USER_PROFILE,
};
