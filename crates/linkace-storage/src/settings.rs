use async_trait::async_trait;
use dashmap::DashMap;
use linkace_core::settings::{Result, SettingsStore};
use tracing::trace;

/// In-memory settings store using DashMap.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    values: DashMap<String, String>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `values`.
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, value, "updating setting");
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
