//! Username extraction from social media references

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Profile URL or path on a known platform, e.g. `instagram.com/@handle/`
    static ref PROFILE_URL_REGEX: Regex = Regex::new(
        r"(?:instagram\.com|facebook\.com|twitter\.com|linkedin\.com|github\.com|tiktok\.com|youtube\.com|reddit\.com)/@?([^/?]+)"
    )
    .expect("Could not compile regex");

    /// Bare handle with an optional leading `@`
    static ref HANDLE_REGEX: Regex =
        Regex::new(r"^@?([a-zA-Z0-9_.-]+)$").expect("Could not compile regex");
}

/// Reduce a handle or profile URL to the bare username.
///
/// Anything that matches neither shape is returned unchanged. Case is preserved.
pub fn extract_username(reference: &str) -> String {
    for pattern in [&*PROFILE_URL_REGEX, &*HANDLE_REGEX] {
        if let Some(username) = pattern.captures(reference).and_then(|caps| caps.get(1)) {
            return username.as_str().to_string();
        }
    }

    reference.to_string()
}
