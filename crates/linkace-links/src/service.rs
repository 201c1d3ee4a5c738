use crate::error::{LinkServiceError, Result};
use linkace_archiver::ArchiveDispatcher;
use linkace_core::{
    find_duplicates, validate_url, ArchiveSubmitter, Link, LinkChanges, LinkId, LinkRepository,
    NewLink, NormalizedUrlKey, Revision, SettingsStore,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of [`LinkService::create`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedLink {
    pub link: Link,
    /// Other links that look like the same bookmark.
    pub duplicates: Vec<LinkId>,
    /// Whether an archive backup was fired for the new link.
    pub archive_dispatched: bool,
}

/// Application service for links.
///
/// This service wraps a [`LinkRepository`] and an [`ArchiveDispatcher`] to handle:
/// - URL validation
/// - Duplicate detection by normalized URL key
/// - Archive backups for new links and changed URLs
/// - Trash, restore and permanent deletion
pub struct LinkService<R, S, A> {
    repository: Arc<R>,
    archiver: ArchiveDispatcher<S, A>,
}

impl<R, S, A> Clone for LinkService<R, S, A> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            archiver: self.archiver.clone(),
        }
    }
}

impl<R: LinkRepository, S: SettingsStore, A: ArchiveSubmitter> LinkService<R, S, A> {
    pub fn new(repository: R, archiver: ArchiveDispatcher<S, A>) -> Self {
        Self {
            repository: Arc::new(repository),
            archiver,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Stores a new link, fires its archive backup and reports duplicates.
    ///
    /// Duplicates are looked up before the link is stored, so a failed lookup
    /// stores nothing. The link is kept even if the archive settings cannot be
    /// read.
    pub async fn create(&self, mut new: NewLink) -> Result<CreatedLink> {
        new.url = new.url.trim().to_owned();
        validate_url(&new.url)?;

        let duplicates = self.find_duplicates_excluding(&new.url, None).await?;

        let link = self.repository.insert(new).await?;
        info!(link_id = %link.id, url = %link.url, "created link");
        if !duplicates.is_empty() {
            debug!(link_id = %link.id, count = duplicates.len(), "link has possible duplicates");
        }

        let archive_dispatched = self.dispatch_archive(&link).await;

        Ok(CreatedLink {
            link,
            duplicates,
            archive_dispatched,
        })
    }

    /// Applies `changes` to a link. A changed URL fires a new archive backup.
    pub async fn update(&self, id: LinkId, mut changes: LinkChanges) -> Result<Link> {
        if let Some(url) = changes.url.as_mut() {
            *url = url.trim().to_owned();
            validate_url(url)?;
        }

        let before = self.get(id).await?;
        if changes.is_empty() {
            debug!(link_id = %id, "nothing to update");
            return Ok(before);
        }
        let link = self.repository.update(id, changes).await?;

        if link.url != before.url {
            self.dispatch_archive(&link).await;
        }

        Ok(link)
    }

    /// Retrieves a link that is not trashed.
    pub async fn get(&self, id: LinkId) -> Result<Link> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(LinkServiceError::NotFound(id))
    }

    /// Finds other links that look like duplicates of the link `id`.
    pub async fn duplicates_of(&self, id: LinkId) -> Result<Vec<LinkId>> {
        let link = self.get(id).await?;
        self.find_duplicates_excluding(&link.url, Some(id)).await
    }

    /// Finds stored links that look like duplicates of `url`.
    ///
    /// URLs without a host never have duplicates.
    pub async fn duplicates_for_url(&self, url: &str) -> Result<Vec<LinkId>> {
        self.find_duplicates_excluding(url, None).await
    }

    pub async fn revisions(&self, id: LinkId) -> Result<Vec<Revision>> {
        Ok(self.repository.revisions(id).await?)
    }

    /// Moves a link to the trash. Returns `false` if it was already trashed
    /// or does not exist.
    pub async fn trash(&self, id: LinkId) -> Result<bool> {
        Ok(self.repository.soft_delete(id).await?)
    }

    /// Restores a trashed link. Returns `false` if it was not trashed.
    pub async fn restore(&self, id: LinkId) -> Result<bool> {
        Ok(self.repository.restore(id).await?)
    }

    /// Permanently removes a link with its relations and history.
    pub async fn purge(&self, id: LinkId) -> Result<bool> {
        Ok(self.repository.force_delete(id).await?)
    }

    async fn find_duplicates_excluding(
        &self,
        url: &str,
        exclude: Option<LinkId>,
    ) -> Result<Vec<LinkId>> {
        let Some(key) = NormalizedUrlKey::parse(url) else {
            debug!(url, "url has no comparable key, skipping duplicate search");
            return Ok(Vec::new());
        };

        let existing = self.repository.list_urls(exclude).await?;
        Ok(find_duplicates(Some(&key), existing))
    }

    async fn dispatch_archive(&self, link: &Link) -> bool {
        match self.archiver.dispatch(link).await {
            Ok(dispatched) => dispatched,
            Err(e) => {
                warn!(link_id = %link.id, error = %e, "could not dispatch archive backup");
                false
            }
        }
    }
}
