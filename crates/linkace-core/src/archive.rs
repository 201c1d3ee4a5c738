use crate::error::ArchiveError;
use crate::link::{Link, LinkId};
use crate::settings::ArchiveSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Decides whether a link should be submitted to the web archive.
///
/// Nothing is archived while backups are disabled globally. Private links
/// additionally require private backups to be enabled.
pub const fn should_archive(backups_enabled: bool, private_backups_enabled: bool, is_private: bool) -> bool {
    if !backups_enabled {
        return false;
    }
    if is_private && !private_backups_enabled {
        return false;
    }
    true
}

impl ArchiveSettings {
    /// Applies [`should_archive`] to a link with the given privacy flag.
    pub const fn allows(&self, is_private: bool) -> bool {
        should_archive(self.backups_enabled, self.private_backups_enabled, is_private)
    }
}

/// Payload handed to the archival job infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveJob {
    pub link_id: LinkId,
    pub url: String,
}

impl From<&Link> for ArchiveJob {
    fn from(link: &Link) -> Self {
        Self {
            link_id: link.id,
            url: link.url.clone(),
        }
    }
}

/// Hands archival jobs over to an asynchronous worker.
///
/// Implementations enqueue and return; they never wait for the archive
/// itself to complete.
#[async_trait]
pub trait ArchiveSubmitter: Send + Sync + 'static {
    async fn submit(&self, job: ArchiveJob) -> Result<()>;
}
