pub mod clock;
pub mod config;
pub mod mode;
pub mod timer;
pub mod weather;

use deskclock_core::{Config, Database, KvStore, MemoryStore, ModeManager, StoreError, Theme};

use crate::render::Renderer;

/// Backing store for a single command invocation.
///
/// Falls back to memory when the data directory or database can't be used,
/// so every command still runs, just without remembering anything.
pub(crate) enum AppStore {
    Disk(Database),
    Memory(MemoryStore),
}

impl KvStore for AppStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            AppStore::Disk(db) => db.get(key),
            AppStore::Memory(mem) => mem.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            AppStore::Disk(db) => db.set(key, value),
            AppStore::Memory(mem) => mem.set(key, value),
        }
    }
}

pub(crate) fn open_store() -> AppStore {
    match Database::open() {
        Ok(db) => AppStore::Disk(db),
        Err(e) => {
            tracing::warn!(error = %e, "storage unavailable, state will not persist");
            AppStore::Memory(MemoryStore::new())
        }
    }
}

pub(crate) fn load_modes(store: &AppStore) -> ModeManager<&AppStore> {
    let mut modes = ModeManager::new(store);
    modes.load_initial();
    modes
}

pub(crate) fn renderer(config: &Config) -> Renderer {
    Renderer::new(Theme::apply(&config.ui.theme))
}
