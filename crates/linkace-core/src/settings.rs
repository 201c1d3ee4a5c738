use crate::error::SettingsError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Global switch for submitting links to the web archive.
pub const ARCHIVE_BACKUPS_ENABLED: &str = "archive_backups_enabled";
/// Allows private links to be archived as well.
pub const ARCHIVE_PRIVATE_BACKUPS_ENABLED: &str = "archive_private_backups_enabled";

/// Interprets a stored settings value: `"0"` is off, anything else is on.
pub fn parse_flag(value: &str) -> bool {
    value != "0"
}

/// A key-value store of global application settings.
#[async_trait]
pub trait SettingsStore: Send + Sync + 'static {
    /// Returns the raw value for `key`, or `None` if it was never set.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Reads `key` as a flag. Unset keys are off.
    async fn flag(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.as_deref().is_some_and(parse_flag))
    }
}

/// Archive-related flags, read from a [`SettingsStore`] once per decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct ArchiveSettings {
    #[builder(default)]
    pub backups_enabled: bool,
    #[builder(default)]
    pub private_backups_enabled: bool,
}

impl ArchiveSettings {
    pub async fn load<S: SettingsStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self {
            backups_enabled: store.flag(ARCHIVE_BACKUPS_ENABLED).await?,
            private_backups_enabled: store.flag(ARCHIVE_PRIVATE_BACKUPS_ENABLED).await?,
        })
    }

    /// Converts raw stored values. Missing values are off.
    pub fn from_raw(backups_enabled: Option<&str>, private_backups_enabled: Option<&str>) -> Self {
        Self {
            backups_enabled: backups_enabled.is_some_and(parse_flag),
            private_backups_enabled: private_backups_enabled.is_some_and(parse_flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, String>>);

    #[async_trait]
    impl SettingsStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0.lock().unwrap().insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    #[test]
    fn zero_is_the_only_false_value() {
        assert!(!parse_flag("0"));
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("false"));
        assert!(parse_flag(""));
    }

    #[test]
    fn from_raw_treats_missing_as_off() {
        assert_eq!(ArchiveSettings::from_raw(None, None), ArchiveSettings::default());
        assert_eq!(
            ArchiveSettings::from_raw(Some("1"), Some("0")),
            ArchiveSettings::builder().backups_enabled(true).build()
        );
    }

    #[tokio::test]
    async fn load_from_store() {
        let store = MapStore::default();
        assert_eq!(ArchiveSettings::load(&store).await.unwrap(), ArchiveSettings::default());

        store.set(ARCHIVE_BACKUPS_ENABLED, "1").await.unwrap();
        store.set(ARCHIVE_PRIVATE_BACKUPS_ENABLED, "0").await.unwrap();
        let settings = ArchiveSettings::load(&store).await.unwrap();
        assert!(settings.backups_enabled);
        assert!(!settings.private_backups_enabled);
    }
}
