use crate::error::CoreError;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use typed_builder::TypedBuilder;
use url::Url;

/// Identifier of a stored link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(u64);

impl LinkId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for LinkId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of the last reachability check of a link.
///
/// The numeric codes are stable and shared with stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LinkStatus {
    #[default]
    Ok,
    Moved,
    Broken,
}

impl LinkStatus {
    pub const fn code(self) -> u8 {
        match self {
            LinkStatus::Ok => 1,
            LinkStatus::Moved => 2,
            LinkStatus::Broken => 3,
        }
    }
}

impl TryFrom<u8> for LinkStatus {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LinkStatus::Ok),
            2 => Ok(LinkStatus::Moved),
            3 => Ok(LinkStatus::Broken),
            other => Err(CoreError::InvalidStatus(other)),
        }
    }
}

impl From<LinkStatus> for u8 {
    fn from(value: LinkStatus) -> Self {
        value.code()
    }
}

impl Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkStatus::Ok => f.write_str("ok"),
            LinkStatus::Moved => f.write_str("moved"),
            LinkStatus::Broken => f.write_str("broken"),
        }
    }
}

/// A bookmark owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub user_id: u64,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    /// Explicit icon override; `None` lets the host decide.
    pub icon: Option<String>,
    pub is_private: bool,
    pub status: LinkStatus,
    /// Excludes the link from periodic reachability checks.
    pub check_disabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Link {
    /// Returns `true` if the link has been soft-deleted.
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Checks that `url` can be stored as a bookmark.
///
/// Any absolute URL is accepted, including ones without a host; those are
/// simply never matched as duplicates.
pub fn validate_url(url: &str) -> Result<(), CoreError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidUrl("URL cannot be empty".to_string()));
    }
    Url::parse(trimmed).map_err(|e| CoreError::InvalidUrl(format!("{trimmed}: {e}")))?;
    Ok(())
}

/// Input for creating a link.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct NewLink {
    pub user_id: u64,
    #[builder(setter(into))]
    pub url: String,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(strip_option, into))]
    pub description: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub icon: Option<String>,
    #[builder(default)]
    pub is_private: bool,
    #[builder(default)]
    pub check_disabled: bool,
}

/// A partial update of a link. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, TypedBuilder)]
pub struct LinkChanges {
    #[builder(default, setter(strip_option, into))]
    pub url: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub title: Option<String>,
    #[builder(default, setter(strip_option))]
    pub description: Option<Option<String>>,
    #[builder(default, setter(strip_option))]
    pub is_private: Option<bool>,
    #[builder(default, setter(strip_option))]
    pub status: Option<LinkStatus>,
    #[builder(default, setter(strip_option))]
    pub check_disabled: Option<bool>,
}

impl LinkChanges {
    pub fn is_empty(&self) -> bool {
        self == &LinkChanges::default()
    }
}
