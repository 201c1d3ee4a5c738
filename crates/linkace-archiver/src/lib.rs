//! Archive dispatch for new and changed links.
//!
//! The [`ArchiveDispatcher`] reads the archive flags from a settings store,
//! applies [`linkace_core::should_archive`] and, when allowed, hands an
//! [`ArchiveJob`](linkace_core::ArchiveJob) to an
//! [`ArchiveSubmitter`](linkace_core::ArchiveSubmitter) without waiting for it.
//!
//! # Example
//!
//! ```rust
//! use linkace_archiver::{ArchiveDispatcher, CachedSettingsStore, ChannelSubmitter};
//! use linkace_storage::InMemorySettingsStore;
//!
//! # async fn example() {
//! let settings = CachedSettingsStore::new(InMemorySettingsStore::new());
//! let (submitter, mut queue) = ChannelSubmitter::new(64);
//! let dispatcher = ArchiveDispatcher::new(settings, submitter);
//!
//! // the hosting job infrastructure drains the queue
//! tokio::spawn(async move {
//!     while let Some(job) = queue.recv().await {
//!         println!("archive {}", job.url);
//!     }
//! });
//! # let _ = dispatcher;
//! # }
//! ```

pub mod dispatcher;
pub mod queue;
pub mod settings;

pub use dispatcher::ArchiveDispatcher;
pub use queue::{ArchiveQueue, ChannelSubmitter};
pub use settings::{CacheConfig, CachedSettingsStore};
