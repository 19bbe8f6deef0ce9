use crate::domain::ports::ConfigStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory configuration store.
///
/// Uses `Arc<RwLock<HashMap<String, String>>>` to allow shared concurrent
/// access. Ideal for testing or running without a settings file.
#[derive(Default, Clone)]
pub struct InMemoryConfigStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryConfigStore {
    /// Creates a new, empty in-memory configuration store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
