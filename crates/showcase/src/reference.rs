//! Repository reference parsing.
//!
//! A reference is the `owner/name` pair embedded in a repository URL. Parsing
//! is a pure function: malformed input yields `None`, never a panic.

use std::fmt;

use url::Url;

/// Owner/name pair identifying a repository on a hosting service.
///
/// Only produced by [`parse_reference`]; both segments are non-empty and
/// usable directly as URL path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoReference {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Extract a repository reference from a URL-ish string.
///
/// Two shapes are recognized:
/// - an HTTP(S) URL (`https://host/owner/name`), optionally suffixed with
///   `.git`, a trailing slash, or extra path segments (the first two
///   non-empty segments win);
/// - an SSH-style form (`host:owner/name.git`), with an optional `user@`
///   prefix; the `.git` suffix is optional in both shapes.
///
/// A trailing `.git` is stripped from the name and case is preserved as
/// given. Anything without a recognizable host/owner/name structure yields
/// `None`.
#[must_use]
pub fn parse_reference(input: &str) -> Option<RepoReference> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(trimmed) {
        if matches!(url.scheme(), "http" | "https") {
            return from_url(&url);
        }
        // Not an http(s) URL. An scp-style "host:owner/name" also parses as
        // a URL whose scheme is the host, so fall through and try that shape.
    }

    parse_scp_form(trimmed)
}

fn from_url(url: &Url) -> Option<RepoReference> {
    url.host_str()?;

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let name = segments.next()?;

    build_reference(owner, name)
}

fn parse_scp_form(input: &str) -> Option<RepoReference> {
    let rest = input.split_once('@').map_or(input, |(_, rest)| rest);
    let (host, path) = rest.split_once(':')?;
    if !looks_like_host(host) {
        return None;
    }

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let name = segments.next()?;

    build_reference(owner, name)
}

fn build_reference(owner: &str, name: &str) -> Option<RepoReference> {
    let name = name.strip_suffix(".git").unwrap_or(name);
    if !is_valid_segment(owner) || !is_valid_segment(name) {
        return None;
    }

    Some(RepoReference {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('/') && !segment.chars().any(char::is_whitespace)
}

fn looks_like_host(host: &str) -> bool {
    !host.is_empty() && host.contains('.') && !host.chars().any(char::is_whitespace)
}
