use crate::errors::CoreError;

/// String key/value storage with browser local-storage semantics:
/// synchronous, single writer, last write wins.
///
/// Methods take `&self` so a store can be shared between the session
/// holder and an auth backend; implementations handle their own locking.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}
