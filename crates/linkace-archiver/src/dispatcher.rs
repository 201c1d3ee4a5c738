use linkace_core::archive::Result;
use linkace_core::{ArchiveJob, ArchiveSettings, ArchiveSubmitter, Link, SettingsStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Submits links to the web archive when the settings allow it.
///
/// Submission is fire-and-forget: [`dispatch`](Self::dispatch) spawns the
/// hand-over on the tokio runtime and returns without waiting. Failures are
/// logged and never reach the caller.
#[derive(Debug)]
pub struct ArchiveDispatcher<S, A> {
    settings: Arc<S>,
    submitter: Arc<A>,
}

impl<S, A> Clone for ArchiveDispatcher<S, A> {
    fn clone(&self) -> Self {
        Self {
            settings: Arc::clone(&self.settings),
            submitter: Arc::clone(&self.submitter),
        }
    }
}

impl<S: SettingsStore, A: ArchiveSubmitter> ArchiveDispatcher<S, A> {
    pub fn new(settings: S, submitter: A) -> Self {
        Self::from_shared(Arc::new(settings), Arc::new(submitter))
    }

    /// Creates a dispatcher sharing its collaborators with other owners.
    pub fn from_shared(settings: Arc<S>, submitter: Arc<A>) -> Self {
        Self {
            settings,
            submitter,
        }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Reads the current archive flags.
    pub async fn archive_settings(&self) -> Result<ArchiveSettings> {
        Ok(ArchiveSettings::load(self.settings.as_ref()).await?)
    }

    /// Fires an archive job for `link` if the settings allow it.
    ///
    /// Returns `true` if a job was fired. Only reading the settings can fail.
    pub async fn dispatch(&self, link: &Link) -> Result<bool> {
        let settings = self.archive_settings().await?;

        if !settings.allows(link.is_private) {
            debug!(
                link_id = %link.id,
                is_private = link.is_private,
                backups_enabled = settings.backups_enabled,
                private_backups_enabled = settings.private_backups_enabled,
                "archive backup skipped"
            );
            return Ok(false);
        }

        let job = ArchiveJob::from(link);
        let submitter = Arc::clone(&self.submitter);
        info!(link_id = %job.link_id, url = %job.url, "dispatching archive backup");

        tokio::spawn(async move {
            let link_id = job.link_id;
            if let Err(e) = submitter.submit(job).await {
                warn!(link_id = %link_id, error = %e, "archive submission failed");
            }
        });

        Ok(true)
    }
}
