use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use linkace_core::repository::{
    diff_revisions, LinkRepository, ReadLinkRepository, Result, REVISION_LIMIT,
};
use linkace_core::{Link, LinkChanges, LinkId, LinkList, LinkStatus, NewLink, Note, Revision, StorageError, Tag};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// In-memory implementation of the [`LinkRepository`] trait using DashMap.
///
/// Soft delete sets `deleted_at`; trashed links stay in the map until
/// [`LinkRepository::force_delete`] removes them along with their relations.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<LinkId, Link>,
    tags: DashMap<LinkId, Vec<Tag>>,
    lists: DashMap<LinkId, Vec<LinkList>>,
    notes: DashMap<LinkId, Vec<Note>>,
    revisions: DashMap<LinkId, Vec<Revision>>,
    next_link_id: AtomicU64,
    next_note_id: AtomicU64,
}

impl InMemoryLinkRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: DashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn active(&self, id: LinkId) -> Option<Link> {
        self.links
            .get(&id)
            .filter(|link| !link.is_trashed())
            .map(|link| link.value().clone())
    }

    fn ensure_active(&self, id: LinkId) -> Result<()> {
        match self.active(id) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(id)),
        }
    }
}

#[async_trait]
impl ReadLinkRepository for InMemoryLinkRepository {
    async fn find_by_id(&self, id: LinkId) -> Result<Option<Link>> {
        Ok(self.active(id))
    }

    async fn find_with_trashed(&self, id: LinkId) -> Result<Option<Link>> {
        Ok(self.links.get(&id).map(|link| link.value().clone()))
    }

    async fn list_urls(&self, exclude: Option<LinkId>) -> Result<Vec<(LinkId, String)>> {
        let mut urls: Vec<(LinkId, String)> = self
            .links
            .iter()
            .filter(|link| !link.is_trashed() && Some(link.id) != exclude)
            .map(|link| (link.id, link.url.clone()))
            .collect();
        urls.sort_by_key(|(id, _)| *id);
        Ok(urls)
    }

    async fn find_related_tags(&self, id: LinkId) -> Result<Vec<Tag>> {
        Ok(self.tags.get(&id).map(|t| t.value().clone()).unwrap_or_default())
    }

    async fn find_related_lists(&self, id: LinkId) -> Result<Vec<LinkList>> {
        Ok(self.lists.get(&id).map(|l| l.value().clone()).unwrap_or_default())
    }

    async fn find_notes(&self, id: LinkId) -> Result<Vec<Note>> {
        Ok(self.notes.get(&id).map(|n| n.value().clone()).unwrap_or_default())
    }

    async fn revisions(&self, id: LinkId) -> Result<Vec<Revision>> {
        Ok(self.revisions.get(&id).map(|r| r.value().clone()).unwrap_or_default())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new: NewLink) -> Result<Link> {
        let id = LinkId::new(self.next_link_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = Timestamp::now();

        let link = Link {
            id,
            user_id: new.user_id,
            url: new.url,
            title: new.title,
            description: new.description,
            icon: new.icon,
            is_private: new.is_private,
            status: LinkStatus::Ok,
            check_disabled: new.check_disabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.links.insert(id, link.clone());
        debug!(link_id = %id, url = %link.url, "stored link");
        Ok(link)
    }

    async fn update(&self, id: LinkId, changes: LinkChanges) -> Result<Link> {
        let now = Timestamp::now();

        let (updated, revisions) = {
            let mut entry = match self.links.get_mut(&id) {
                Some(entry) if !entry.is_trashed() => entry,
                _ => return Err(StorageError::NotFound(id)),
            };
            let link = entry.value_mut();
            let revisions = diff_revisions(link, &changes, now);

            if let Some(url) = changes.url {
                link.url = url;
            }
            if let Some(title) = changes.title {
                link.title = title;
            }
            if let Some(description) = changes.description {
                link.description = description;
            }
            if let Some(is_private) = changes.is_private {
                link.is_private = is_private;
            }
            if let Some(status) = changes.status {
                link.status = status;
            }
            if let Some(check_disabled) = changes.check_disabled {
                link.check_disabled = check_disabled;
            }
            link.updated_at = now;

            (link.clone(), revisions)
        };

        trace!(link_id = %id, revisions = revisions.len(), "updated link");
        self.record_revision(revisions).await?;
        Ok(updated)
    }

    async fn soft_delete(&self, id: LinkId) -> Result<bool> {
        let Some(mut link) = self.links.get_mut(&id) else {
            return Ok(false);
        };
        if link.is_trashed() {
            return Ok(false);
        }
        link.deleted_at = Some(Timestamp::now());
        debug!(link_id = %id, "moved link to trash");
        Ok(true)
    }

    async fn restore(&self, id: LinkId) -> Result<bool> {
        let Some(mut link) = self.links.get_mut(&id) else {
            return Ok(false);
        };
        if link.deleted_at.take().is_none() {
            return Ok(false);
        }
        debug!(link_id = %id, "restored link from trash");
        Ok(true)
    }

    async fn force_delete(&self, id: LinkId) -> Result<bool> {
        let removed = self.links.remove(&id).is_some();
        self.tags.remove(&id);
        self.lists.remove(&id);
        self.notes.remove(&id);
        self.revisions.remove(&id);
        if removed {
            debug!(link_id = %id, "permanently deleted link");
        }
        Ok(removed)
    }

    async fn attach_tags(&self, id: LinkId, tags: &[Tag]) -> Result<()> {
        self.ensure_active(id)?;
        let mut attached = self.tags.entry(id).or_default();
        for tag in tags {
            if !attached.contains(tag) {
                attached.push(tag.clone());
            }
        }
        Ok(())
    }

    async fn attach_lists(&self, id: LinkId, lists: &[LinkList]) -> Result<()> {
        self.ensure_active(id)?;
        let mut attached = self.lists.entry(id).or_default();
        for list in lists {
            if !attached.contains(list) {
                attached.push(list.clone());
            }
        }
        Ok(())
    }

    async fn add_note(&self, id: LinkId, body: &str) -> Result<Note> {
        self.ensure_active(id)?;
        let note = Note {
            id: self.next_note_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id: id,
            body: body.to_owned(),
            created_at: Timestamp::now(),
        };
        self.notes.entry(id).or_default().push(note.clone());
        Ok(note)
    }

    async fn record_revision(&self, revisions: Vec<Revision>) -> Result<()> {
        for revision in revisions {
            let mut history = self.revisions.entry(revision.link_id).or_default();
            history.push(revision);
            if history.len() > REVISION_LIMIT {
                let excess = history.len() - REVISION_LIMIT;
                history.drain(..excess);
            }
        }
        Ok(())
    }
}
