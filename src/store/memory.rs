use crate::core::store::SettingsStore;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Settings store that lives only as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let map = self
            .inner
            .read()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        let value = map.get(key).cloned();
        debug!(key, hit = value.is_some(), "Memory store GET");
        Ok(value)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        debug!(key, "Memory store PUT");
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        map.clear();
        debug!("Memory store CLEAR");
        Ok(())
    }
}
