//! The typed settings store: load with merge-on-read, save on commit.

use serde::de::DeserializeOwned;
use serde::Serialize;

use multiplier_core::settings::{default_personas, AutomationConfig, Persona, PromptConfig, UserProfile};

use crate::backend::StorageBackend;
use crate::error::StoreError;

/// Persisted key for the persona list.
pub const KEY_PERSONAS: &str = "sm_personas";
/// Persisted key for the prompt instructions.
pub const KEY_PROMPTS: &str = "sm_prompts";
/// Persisted key for the author profile.
pub const KEY_USER_PROFILE: &str = "sm_user_profile";
/// Persisted key for the automation target.
pub const KEY_AUTOMATION: &str = "sm_automation";

/// All four settings documents, fully resolved against defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub personas: Vec<Persona>,
    pub prompts: PromptConfig,
    pub profile: UserProfile,
    pub automation: AutomationConfig,
}

/// Load/save facade over a [`StorageBackend`].
pub struct SettingsStore {
    backend: Box<dyn StorageBackend>,
}

impl SettingsStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Load all four documents, falling back per key as needed.
    pub fn load_all(&self) -> Settings {
        Settings {
            personas: self.load_array(KEY_PERSONAS, default_personas()),
            prompts: self.load_object(KEY_PROMPTS, &PromptConfig::default()),
            profile: self.load_object(KEY_USER_PROFILE, &UserProfile::default()),
            automation: self.load_object(KEY_AUTOMATION, &AutomationConfig::default()),
        }
    }

    /// Load an object-shaped document, shallow-merging the persisted JSON
    /// over the default so fields added since the document was written
    /// pick up their default values. Absent or unusable data yields the
    /// default; this never fails.
    pub fn load_object<T>(&self, key: &str, default: &T) -> T
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let Some(raw) = self.read_raw(key) else {
            return default.clone();
        };

        let loaded: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt settings document, using defaults");
                return default.clone();
            }
        };

        let mut merged = match serde_json::to_value(default) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Default settings not serializable");
                return default.clone();
            }
        };

        match (&mut merged, loaded) {
            (serde_json::Value::Object(base), serde_json::Value::Object(overlay)) => {
                base.extend(overlay);
            }
            _ => {
                tracing::warn!(key, "Persisted settings are not an object, using defaults");
                return default.clone();
            }
        }

        match serde_json::from_value(merged) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Merged settings do not deserialize, using defaults");
                default.clone()
            }
        }
    }

    /// Load an array-shaped document (the persona list). The persisted
    /// value is taken wholesale when it parses as the expected array;
    /// anything else falls back to the default list.
    pub fn load_array<T>(&self, key: &str, default: Vec<T>) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.read_raw(key) else {
            return default;
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value @ serde_json::Value::Array(_)) => match serde_json::from_value(value) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(key, error = %e, "Persisted list has wrong shape, using defaults");
                    default
                }
            },
            Ok(_) => {
                tracing::warn!(key, "Persisted settings are not an array, using defaults");
                default
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt settings document, using defaults");
                default
            }
        }
    }

    /// Persist a document. Called synchronously after every committed
    /// mutation.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value)?;
        self.backend.write(key, &raw)?;
        tracing::debug!(key, "Settings document persisted");
        Ok(())
    }

    /// Whether the backing storage is reachable.
    pub fn health_check(&self) -> bool {
        self.backend.read(KEY_PROMPTS).is_ok()
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "Settings read failed, using defaults");
                None
            }
        }
    }
}
