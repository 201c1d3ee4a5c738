use async_trait::async_trait;
use linkace_core::settings::{Result, SettingsStore};
use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

const DEFAULT_MAX_CAPACITY: u64 = 1_000;
const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// A [`SettingsStore`] decorator that caches lookups in memory.
///
/// Settings are global and read for every new link, so lookups go through a
/// Moka cache. Writes made through this decorator invalidate the cached key;
/// writes made elsewhere become visible once the entry expires.
#[derive(Debug, Clone)]
pub struct CachedSettingsStore<S> {
    inner: S,
    // Option<String> so that unset keys are cached too
    cache: Cache<String, Option<String>>,
}

/// Configuration of a [`CachedSettingsStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CacheConfig {
    /// Maximum number of cached keys.
    #[builder(default = DEFAULT_MAX_CAPACITY)]
    pub max_capacity: u64,
    /// Time-to-live of cached values.
    #[builder(default = DEFAULT_TTL)]
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<S: SettingsStore> CachedSettingsStore<S> {
    /// Wraps `inner` with the default cache configuration.
    pub fn new(inner: S) -> Self {
        Self::with_config(inner, CacheConfig::default())
    }

    pub fn with_config(inner: S, config: CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl)
            .build();
        Self { inner, cache }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drops the cached value of `key`.
    pub async fn invalidate(&self, key: &str) {
        trace!(key, "invalidating cached setting");
        self.cache.invalidate(key).await;
    }
}

#[async_trait]
impl<S: SettingsStore> SettingsStore for CachedSettingsStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // try_get_with coalesces concurrent misses for the same key
        let value = self
            .cache
            .try_get_with(key.to_owned(), async {
                trace!(key, "settings cache miss");
                self.inner.get(key).await
            })
            .await
            .map_err(|e| e.as_ref().clone())?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value).await?;
        self.cache.invalidate(key).await;
        debug!(key, value, "setting updated");
        Ok(())
    }
}
