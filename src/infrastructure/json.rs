use crate::domain::ports::ConfigStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A configuration store persisted as a single JSON object on disk.
///
/// The whole map is loaded on `open` and rewritten on every `set`. The
/// file holds a handful of shop settings, so a full rewrite stays cheap.
#[derive(Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl JsonConfigStore {
    /// Opens the store, loading existing entries if the file is present.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&*entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
