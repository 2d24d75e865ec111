use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// Bearer token of the current session.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// JSON-encoded `User` of the current session.
pub const AUTH_USER_KEY: &str = "auth_user";

/// JSON array of `StoredAccount` records (local auth only).
pub const MOCK_USERS_KEY: &str = "mock_users";

/// Typed JSON access on top of a string [`KeyValueStore`].
pub struct StorageManager;

impl StorageManager {
    /// Read and deserialize `key`. A missing key is `Ok(None)`.
    ///
    /// Flow: store → JSON text → T
    pub fn load_json<T: DeserializeOwned>(
        store: &dyn KeyValueStore,
        key: &str,
    ) -> Result<Option<T>, CoreError> {
        match store.get(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw).map_err(|e| {
                    CoreError::Deserialization(format!("Failed to parse '{key}': {e}"))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize `value` to JSON and write it under `key`.
    ///
    /// Flow: T → JSON text → store
    pub fn save_json<T: Serialize + ?Sized>(
        store: &dyn KeyValueStore,
        key: &str,
        value: &T,
    ) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize '{key}': {e}")))?;
        store.set(key, &raw)
    }

    /// Like [`load_json`](Self::load_json) but a missing key yields `T::default()`.
    pub fn load_json_or_default<T: DeserializeOwned + Default>(
        store: &dyn KeyValueStore,
        key: &str,
    ) -> Result<T, CoreError> {
        Ok(Self::load_json(store, key)?.unwrap_or_default())
    }
}
