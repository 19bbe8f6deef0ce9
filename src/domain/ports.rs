use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub type ConfigStoreBox = Box<dyn ConfigStore>;
