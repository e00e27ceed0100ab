//! Seed token extraction from the target profile

use std::collections::HashSet;

use super::identifier::extract_username;
use super::vocab::{COLORS, SEASONS};
use crate::types::{ProfileRecord, ReconFacts, SocialHandles};

/// Deduplicated seed tokens in first-seen order.
///
/// Order matters to the capped passes, which only combine the first few words.
#[derive(Debug, Clone, Default)]
pub struct BaseWordSet {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl BaseWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trimmed word; blank input is ignored.
    /// Returns true when the word was new.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.words.push(word.to_string());
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// The first `n` words in insertion order
    pub fn first(&self, n: usize) -> &[String] {
        &self.words[..n.min(self.words.len())]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a BaseWordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for BaseWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

/// First character upper case, the rest lower case
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Add the lowercase and capitalized forms of a trimmed value
fn add_forms(words: &mut BaseWordSet, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    words.insert(&value.to_lowercase());
    words.insert(&capitalize(value));
}

/// Build the base word set for a run.
///
/// Book and game preferences are deliberately left out; seasons and colors are
/// always folded in regardless of the matching option toggles.
pub fn extract(profile: &ProfileRecord, social: &SocialHandles, recon: &ReconFacts) -> BaseWordSet {
    let mut words = BaseWordSet::new();

    // All lowercase names first, capitalized names after
    for name in profile.name_fields() {
        words.insert(&name.trim().to_lowercase());
    }
    for name in profile.name_fields() {
        words.insert(&capitalize(name.trim()));
    }

    for keyword in &profile.keywords {
        add_forms(&mut words, keyword);
    }

    for (platform, reference) in social.iter() {
        if reference.trim().is_empty() {
            continue;
        }
        let username = extract_username(reference.trim());
        tracing::trace!(platform = %platform, username = %username, "Extracted username");
        add_forms(&mut words, &username);
    }

    for fact in recon
        .hobbies
        .iter()
        .chain(&recon.favorite_teams)
        .chain(&recon.favorite_movies)
    {
        add_forms(&mut words, fact);
    }

    for word in SEASONS.iter().chain(COLORS) {
        words.insert(word);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("alex"), "Alex");
        assert_eq!(capitalize("mcDONALD"), "Mcdonald");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_insert_trims_and_rejects_blank() {
        let mut words = BaseWordSet::new();
        assert!(words.insert("  alex "));
        assert!(!words.insert("alex"));
        assert!(!words.insert("   "));
        assert!(!words.insert(""));
        assert_eq!(words.as_slice(), &["alex".to_string()]);
    }

    #[test]
    fn test_extract_profile_order() {
        let profile = ProfileRecord {
            first_name: "Alex".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        let words = extract(&profile, &SocialHandles::default(), &ReconFacts::default());

        assert_eq!(words.first(4), &["alex", "doe", "Alex", "Doe"]);
        assert_eq!(words.len(), 4 + SEASONS.len() + COLORS.len());
    }

    #[test]
    fn test_extract_nicknames_get_both_forms() {
        let profile = ProfileRecord {
            partner_nickname: "sunny".to_string(),
            child_nickname: " BEAR ".to_string(),
            ..Default::default()
        };
        let words = extract(&profile, &SocialHandles::default(), &ReconFacts::default());

        for expected in ["sunny", "Sunny", "bear", "Bear"] {
            assert!(words.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_extract_social_and_recon() {
        let mut social = SocialHandles::default();
        social.insert("instagram", "https://instagram.com/JaneDoe123/");
        social.insert("twitter", "@jdoe");
        social.insert("github", "   ");

        let recon = ReconFacts {
            hobbies: vec!["chess".to_string()],
            favorite_teams: vec!["Lakers".to_string()],
            favorite_movies: vec!["matrix".to_string(), "".to_string()],
            favorite_books: vec!["dune".to_string()],
            favorite_games: vec!["minecraft".to_string()],
            email: "jane@example.com".to_string(),
            ..Default::default()
        };

        let words = extract(&ProfileRecord::default(), &social, &recon);

        for expected in [
            "janedoe123", "Janedoe123", "jdoe", "Jdoe", "chess", "Chess", "lakers", "Lakers",
            "matrix", "Matrix",
        ] {
            assert!(words.contains(expected), "missing {}", expected);
        }
        assert!(!words.contains("dune"));
        assert!(!words.contains("minecraft"));
        assert!(!words.contains("jane@example.com"));
    }

    #[test]
    fn test_extract_trims_social_reference() {
        let mut social = SocialHandles::default();
        social.insert("twitter", " @jane ");
        let words = extract(&ProfileRecord::default(), &social, &ReconFacts::default());

        assert_eq!(words.first(2), &["jane", "Jane"]);
        assert!(!words.contains("@jane"));
    }

    #[test]
    fn test_extract_always_has_seasons_and_colors() {
        let words = extract(
            &ProfileRecord::default(),
            &SocialHandles::default(),
            &ReconFacts::default(),
        );
        assert_eq!(words.len(), SEASONS.len() + COLORS.len());
        assert!(words.contains("winter"));
        assert!(words.contains("purple"));
        assert!(words.iter().all(|w| !w.trim().is_empty()));
    }
}
