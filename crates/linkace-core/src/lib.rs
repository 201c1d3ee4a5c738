//! Core types and rules for the LinkAce bookmark manager.
//!
//! This crate holds everything that does not depend on a storage engine or a
//! job runtime: the [`Link`] model, the URL comparison key used to detect
//! duplicate bookmarks, the archive dispatch policy, and the traits the
//! storage and archiver crates implement.

pub mod archive;
pub mod duplicates;
pub mod error;
pub mod link;
pub mod presentation;
pub mod repository;
pub mod settings;
pub mod url_key;

pub use archive::{should_archive, ArchiveJob, ArchiveSubmitter};
pub use duplicates::{find_duplicates, find_duplicates_of_url};
pub use error::{ArchiveError, CoreError, SettingsError, StorageError};
pub use link::{validate_url, Link, LinkChanges, LinkId, LinkStatus, NewLink};
pub use presentation::LinkIcon;
pub use repository::{LinkList, LinkRepository, Note, ReadLinkRepository, Revision, Tag};
pub use settings::{ArchiveSettings, SettingsStore};
pub use url_key::{normalize, NormalizedUrlKey};
