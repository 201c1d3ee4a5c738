//! Storage backends for links and settings.

pub mod memory;
pub mod settings;

pub use linkace_core::repository::{LinkRepository, ReadLinkRepository, Result};
pub use linkace_core::StorageError;
pub use memory::InMemoryLinkRepository;
pub use settings::InMemorySettingsStore;
