use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const BACKUPS_ENABLED_ENV: &str = "LINKACE_ARCHIVE_BACKUPS_ENABLED";
pub const PRIVATE_BACKUPS_ENABLED_ENV: &str = "LINKACE_ARCHIVE_PRIVATE_BACKUPS_ENABLED";
pub const CANDIDATES_ENV: &str = "LINKACE_DUPLICATE_CANDIDATES";

pub const DEFAULT_FLAG: &str = "0";

#[derive(Debug, Parser)]
#[command(name = "linkace", about = "Bookmark URL utilities")]
pub struct CLI {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the comparison key of a URL.
    Normalize { url: String },

    /// Print the ids of candidate links that duplicate a URL.
    Duplicates {
        url: String,

        /// File with one `<id> <url>` pair per line.
        #[arg(long, env = CANDIDATES_ENV)]
        candidates: PathBuf,
    },

    /// Decide whether a link would be sent to the web archive.
    ShouldArchive {
        /// Stored value of `archive_backups_enabled` ("0" is off).
        #[arg(long, env = BACKUPS_ENABLED_ENV, default_value = DEFAULT_FLAG)]
        backups_enabled: String,

        /// Stored value of `archive_private_backups_enabled` ("0" is off).
        #[arg(long, env = PRIVATE_BACKUPS_ENABLED_ENV, default_value = DEFAULT_FLAG)]
        private_backups_enabled: String,

        /// The link is private.
        #[arg(long)]
        private: bool,
    },
}
