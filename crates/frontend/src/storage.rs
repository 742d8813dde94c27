use dioxus::logger::tracing::warn;
use seatmap_shared::error::StorageError;
use seatmap_shared::selection::{
    MemoryRepository, SelectionRepository, SelectionStore, STORAGE_KEY,
};
use wasm_bindgen::JsValue;

/// Selection store as used by the app.
pub type Selection = SelectionStore<BrowserRepository>;

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Selection snapshot kept in `window.localStorage`.
pub struct LocalStorageRepository {
    storage: web_sys::Storage,
}

impl LocalStorageRepository {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Read(js_message(&e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(LocalStorageRepository { storage })
    }
}

impl SelectionRepository for LocalStorageRepository {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(STORAGE_KEY)
            .map_err(|e| StorageError::Read(js_message(&e)))
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(STORAGE_KEY, snapshot)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}

/// `localStorage` when the browser offers it, otherwise an in-memory
/// fallback that lasts for the session.
pub enum BrowserRepository {
    Local(LocalStorageRepository),
    Memory(MemoryRepository),
}

impl BrowserRepository {
    pub fn open() -> Self {
        match LocalStorageRepository::open() {
            Ok(repo) => BrowserRepository::Local(repo),
            Err(e) => {
                warn!(error = %e, "localStorage unavailable, selection will not persist");
                BrowserRepository::Memory(MemoryRepository::new())
            }
        }
    }
}

impl SelectionRepository for BrowserRepository {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match self {
            BrowserRepository::Local(repo) => repo.load(),
            BrowserRepository::Memory(repo) => repo.load(),
        }
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError> {
        match self {
            BrowserRepository::Local(repo) => repo.save(snapshot),
            BrowserRepository::Memory(repo) => repo.save(snapshot),
        }
    }
}

/// Restore the persisted selection.
pub fn load_selection() -> Selection {
    SelectionStore::load(BrowserRepository::open())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fallback_round_trips() {
        let mut repo = BrowserRepository::Memory(MemoryRepository::new());
        assert!(repo.load().unwrap().is_none());
        repo.save("[]").unwrap();
        assert_eq!(repo.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_fallback_feeds_store() {
        let repo = BrowserRepository::Memory(MemoryRepository::with_snapshot("not json"));
        let store = SelectionStore::load(repo);
        assert!(store.is_empty());
    }
}
