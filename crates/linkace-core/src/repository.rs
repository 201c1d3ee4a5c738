use crate::error::StorageError;
use crate::link::{Link, LinkChanges, LinkId, NewLink};
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Maximum number of revisions kept per link. Older ones are pruned.
pub const REVISION_LIMIT: usize = 30;

/// A tag attached to links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// A user-curated list of links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkList {
    pub id: u64,
    pub name: String,
}

/// A free-text note written on a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub link_id: LinkId,
    pub body: String,
    pub created_at: Timestamp,
}

/// A single field change recorded in a link's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub link_id: LinkId,
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub created_at: Timestamp,
}

/// Computes the revisions produced by applying `changes` to `link`.
///
/// Only tracked fields that actually change produce a revision.
pub fn diff_revisions(link: &Link, changes: &LinkChanges, at: Timestamp) -> Vec<Revision> {
    let mut revisions = Vec::new();
    let mut push = |field: &str, old: Option<String>, new: Option<String>| {
        if old != new {
            revisions.push(Revision {
                link_id: link.id,
                field: field.to_owned(),
                old_value: old,
                new_value: new,
                created_at: at,
            });
        }
    };

    if let Some(url) = &changes.url {
        push("url", Some(link.url.clone()), Some(url.clone()));
    }
    if let Some(title) = &changes.title {
        push("title", Some(link.title.clone()), Some(title.clone()));
    }
    if let Some(description) = &changes.description {
        push("description", link.description.clone(), description.clone());
    }
    if let Some(is_private) = changes.is_private {
        push(
            "is_private",
            Some(link.is_private.to_string()),
            Some(is_private.to_string()),
        );
    }
    if let Some(status) = changes.status {
        push(
            "status",
            Some(link.status.code().to_string()),
            Some(status.code().to_string()),
        );
    }

    revisions
}

/// A read-only view of the link store.
#[async_trait]
pub trait ReadLinkRepository: Send + Sync + 'static {
    /// Retrieves a link by id. Trashed links are not returned.
    async fn find_by_id(&self, id: LinkId) -> Result<Option<Link>>;

    /// Retrieves a link by id, including trashed links.
    async fn find_with_trashed(&self, id: LinkId) -> Result<Option<Link>>;

    /// Lists `(id, url)` pairs of all links that are not trashed, in id order,
    /// optionally leaving out one link.
    async fn list_urls(&self, exclude: Option<LinkId>) -> Result<Vec<(LinkId, String)>>;

    async fn find_related_tags(&self, id: LinkId) -> Result<Vec<Tag>>;

    async fn find_related_lists(&self, id: LinkId) -> Result<Vec<LinkList>>;

    async fn find_notes(&self, id: LinkId) -> Result<Vec<Note>>;

    /// Returns the recorded history of a link, oldest first.
    async fn revisions(&self, id: LinkId) -> Result<Vec<Revision>>;
}

#[async_trait]
pub trait LinkRepository: ReadLinkRepository {
    /// Stores a new link and returns it with its assigned id.
    async fn insert(&self, link: NewLink) -> Result<Link>;

    /// Applies `changes` to a link that is not trashed.
    /// Returns `Err(NotFound)` if the link does not exist or is trashed.
    async fn update(&self, id: LinkId, changes: LinkChanges) -> Result<Link>;

    /// Marks a link as trashed.
    /// Returns `true` if the link existed and was not trashed yet.
    async fn soft_delete(&self, id: LinkId) -> Result<bool>;

    /// Brings a trashed link back.
    /// Returns `true` if the link was trashed.
    async fn restore(&self, id: LinkId) -> Result<bool>;

    /// Removes a link together with its relations and history.
    /// Returns `true` if the link existed.
    async fn force_delete(&self, id: LinkId) -> Result<bool>;

    async fn attach_tags(&self, id: LinkId, tags: &[Tag]) -> Result<()>;

    async fn attach_lists(&self, id: LinkId, lists: &[LinkList]) -> Result<()>;

    async fn add_note(&self, id: LinkId, body: &str) -> Result<Note>;

    /// Appends revisions to a link's history, pruning it to [`REVISION_LIMIT`].
    async fn record_revision(&self, revisions: Vec<Revision>) -> Result<()>;
}
