pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use crate::core::store::SettingsStore;
use disk::DiskStore;
use memory::MemoryStore;
use tracing::{debug, warn};

/// Opens the store selected by `config`. An on-disk store that cannot be
/// opened degrades to an in-memory one, so the calculator still runs on
/// defaults.
pub fn open_store(config: &AppConfig) -> Box<dyn SettingsStore> {
    if !config.persist {
        debug!("Persistence disabled, using in-memory settings");
        return Box::new(MemoryStore::new());
    }

    match config
        .default_data_path()
        .and_then(|path| DiskStore::open(&path.join("settings")))
    {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "Settings store unavailable, falling back to memory");
            Box::new(MemoryStore::new())
        }
    }
}
