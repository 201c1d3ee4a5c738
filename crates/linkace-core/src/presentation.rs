//! Plain data for rendering links in templates.
//!
//! Nothing here produces markup. Templates receive strings and decide how
//! to present them.

use crate::link::{Link, LinkStatus};
use serde::Serialize;
use url::Url;

pub const DEFAULT_MAX_LENGTH: usize = 50;

const ELLIPSIS: &str = "...";
const DEFAULT_ICON: &str = "link";

/// Host keywords mapped to brand icon names. First match wins.
const BRAND_ICONS: &[(&str, &str)] = &[
    ("github.com", "brand.github"),
    ("gitlab.com", "brand.gitlab"),
    ("bitbucket.org", "brand.bitbucket"),
    ("stackoverflow.com", "brand.stackoverflow"),
    ("youtube.com", "brand.youtube"),
    ("youtu.be", "brand.youtube"),
    ("vimeo.com", "brand.vimeo"),
    ("twitter.com", "brand.twitter"),
    ("x.com", "brand.x"),
    ("facebook.com", "brand.facebook"),
    ("instagram.com", "brand.instagram"),
    ("linkedin.com", "brand.linkedin"),
    ("reddit.com", "brand.reddit"),
    ("medium.com", "brand.medium"),
    ("wikipedia.org", "brand.wikipedia"),
    ("amazon.", "brand.amazon"),
    ("apple.com", "brand.apple"),
    ("google.", "brand.google"),
    ("mastodon.", "brand.mastodon"),
    ("docker.com", "brand.docker"),
    ("npmjs.com", "brand.npm"),
    ("crates.io", "brand.rust"),
    ("spotify.com", "brand.spotify"),
    ("twitch.tv", "brand.twitch"),
];

/// Icon data of a link: which icon to show and how to tint it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkIcon {
    pub name: String,
    /// CSS class signalling a non-OK status, if any.
    pub status_class: Option<&'static str>,
}

/// Truncates `text` to at most `max_length` characters, appending `...` when
/// something was cut.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_length).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Returns the URL without its `http(s)://` prefix and surrounding slashes,
/// truncated to `max_length` characters.
pub fn short_url(url: &str, max_length: usize) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    truncate(stripped.trim_matches('/'), max_length)
}

/// Picks the brand icon for a URL's host, falling back to a generic link icon.
pub fn icon_for_url(url: &str) -> &'static str {
    let Some(host) = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_owned)) else {
        return DEFAULT_ICON;
    };

    BRAND_ICONS
        .iter()
        .find(|(keyword, _)| host_matches(&host, keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

fn host_matches(host: &str, keyword: &str) -> bool {
    if keyword.ends_with('.') {
        // prefix keywords like "google." cover every TLD
        return host == keyword.trim_end_matches('.')
            || host.starts_with(keyword)
            || host.contains(&format!(".{keyword}"));
    }
    host == keyword || host.ends_with(&format!(".{keyword}"))
}

pub fn status_class(status: LinkStatus) -> Option<&'static str> {
    match status {
        LinkStatus::Ok => None,
        LinkStatus::Moved => Some("text-warning"),
        LinkStatus::Broken => Some("text-danger"),
    }
}

impl Link {
    pub fn short_title(&self, max_length: usize) -> String {
        truncate(&self.title, max_length)
    }

    pub fn short_url(&self, max_length: usize) -> String {
        short_url(&self.url, max_length)
    }

    pub fn icon(&self) -> LinkIcon {
        let name = match &self.icon {
            Some(icon) => icon.clone(),
            None => icon_for_url(&self.url).to_owned(),
        };
        LinkIcon {
            name,
            status_class: status_class(self.status),
        }
    }

    /// Creation time formatted for display, in UTC.
    pub fn added_at(&self) -> String {
        self.created_at.strftime("%Y-%m-%d %H:%M").to_string()
    }
}
