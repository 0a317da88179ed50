//! Key-value persistence abstraction for settings

use anyhow::Result;

/// A byte-oriented key-value store. Values are opaque to the store; callers
/// encode them with serde_json.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
