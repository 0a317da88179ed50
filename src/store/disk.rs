use crate::core::store::SettingsStore;
use anyhow::{Context, Result};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const SETTINGS_PARTITION: &str = "settings";

/// Settings store backed by a fjall keyspace on disk.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open settings store at {}", path.display()))?;
        let partition = keyspace
            .open_partition(SETTINGS_PARTITION, PartitionCreateOptions::default())
            .context("Failed to open settings partition")?;
        debug!("Opened settings store at {}", path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }

    fn sync(&self) -> Result<()> {
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to flush settings store")
    }
}

impl SettingsStore for DiskStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.partition.get(key)?.map(|v| v.to_vec());
        debug!(key, hit = value.is_some(), "Disk store GET");
        Ok(value)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.partition.insert(key.as_bytes(), value)?;
        debug!(key, "Disk store PUT");
        self.sync()
    }

    fn clear(&self) -> Result<()> {
        let keys = self
            .partition
            .keys()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for key in keys {
            self.partition.remove(key)?;
        }
        debug!("Disk store CLEAR");
        self.sync()
    }
}
