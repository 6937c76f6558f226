//! Token id extraction from page paths.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use percent_encoding::percent_decode_str;

/// Id from `/god/:id`. Anything else, including a missing id, is `None`.
#[must_use]
pub fn parse_god_path(path: &str) -> Option<String> {
    id_after(path, "god")
}

/// Id for the standalone viewer: a non-empty `data-god-id` attribute wins,
/// then `/god-viewer/:id`.
#[must_use]
pub fn parse_viewer_id(attribute: Option<&str>, path: &str) -> Option<String> {
    if let Some(raw) = attribute.filter(|a| !a.is_empty()) {
        return Some(decode(raw));
    }
    id_after(path, "god-viewer")
}

fn id_after(path: &str, prefix: &str) -> Option<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    if segments.next()? != prefix {
        return None;
    }
    segments.next().map(decode).filter(|id| !id.is_empty())
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
