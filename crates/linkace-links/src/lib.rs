//! Link management service.
//!
//! [`LinkService`] ties a [`LinkRepository`](linkace_core::LinkRepository)
//! to an [`ArchiveDispatcher`](linkace_archiver::ArchiveDispatcher): it stores
//! links, reports duplicate bookmarks and fires archive backups.

pub mod error;
pub mod service;

pub use error::LinkServiceError;
pub use service::{CreatedLink, LinkService};
