//! Core types and structures for wordlist-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facts about the target person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    /// DDMMYYYY
    pub birth_date: String,

    pub partner_name: String,
    pub partner_nickname: String,
    pub partner_birth_date: String,

    pub child_name: String,
    pub child_nickname: String,
    pub child_birth_date: String,

    pub pet_name: String,
    pub company_name: String,

    pub keywords: Vec<String>,
}

impl ProfileRecord {
    /// Profile with only a first name set
    pub fn named(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Default::default()
        }
    }

    /// Name-like fields in extraction order
    pub fn name_fields(&self) -> [&str; 9] {
        [
            &self.first_name,
            &self.last_name,
            &self.nickname,
            &self.partner_name,
            &self.partner_nickname,
            &self.child_name,
            &self.child_nickname,
            &self.pet_name,
            &self.company_name,
        ]
    }

    /// Birth dates of the target, partner and child
    pub fn birth_dates(&self) -> [&str; 3] {
        [&self.birth_date, &self.partner_birth_date, &self.child_birth_date]
    }
}

/// Social media references keyed by platform.
///
/// The ten well-known platforms iterate first in a fixed order, anything else
/// lands in `other` and iterates afterwards sorted by platform name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialHandles {
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
    pub tiktok: String,
    pub youtube: String,
    pub reddit: String,
    pub discord: String,
    pub telegram: String,
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

impl SocialHandles {
    /// Known platforms with the prompt label used to collect them
    pub const PLATFORMS: [(&'static str, &'static str); 10] = [
        ("instagram", "Instagram profile/username"),
        ("facebook", "Facebook profile/username"),
        ("twitter", "Twitter/X handle"),
        ("linkedin", "LinkedIn profile"),
        ("github", "GitHub username"),
        ("tiktok", "TikTok username"),
        ("youtube", "YouTube channel"),
        ("reddit", "Reddit username"),
        ("discord", "Discord username"),
        ("telegram", "Telegram username"),
    ];

    /// Set the reference for a platform
    pub fn insert(&mut self, platform: &str, reference: impl Into<String>) {
        let reference = reference.into();
        let platform = platform.to_lowercase();
        match platform.as_str() {
            "instagram" => self.instagram = reference,
            "facebook" => self.facebook = reference,
            "twitter" | "x" => self.twitter = reference,
            "linkedin" => self.linkedin = reference,
            "github" => self.github = reference,
            "tiktok" => self.tiktok = reference,
            "youtube" => self.youtube = reference,
            "reddit" => self.reddit = reference,
            "discord" => self.discord = reference,
            "telegram" => self.telegram = reference,
            _ => {
                self.other.insert(platform, reference);
            }
        }
    }

    /// Look up the reference for a platform
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(platform))
            .map(|(_, reference)| reference)
    }

    /// Iterate `(platform, reference)` pairs, empty entries included
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let known = [
            ("instagram", self.instagram.as_str()),
            ("facebook", self.facebook.as_str()),
            ("twitter", self.twitter.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("github", self.github.as_str()),
            ("tiktok", self.tiktok.as_str()),
            ("youtube", self.youtube.as_str()),
            ("reddit", self.reddit.as_str()),
            ("discord", self.discord.as_str()),
            ("telegram", self.telegram.as_str()),
        ];
        known
            .into_iter()
            .chain(self.other.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Reconnaissance facts about the target.
///
/// Contact fields are collected for the record but do not feed generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconFacts {
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub university: String,
    pub hobbies: Vec<String>,
    pub favorite_teams: Vec<String>,
    pub favorite_movies: Vec<String>,
    pub favorite_books: Vec<String>,
    pub favorite_games: Vec<String>,
}

/// Caps on the cross-vocabulary passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassLimits {
    /// Base words combined with every common password
    pub common_password_words: usize,
    /// Base words combined with every brand name
    pub brand_words: usize,
    /// Numeric tokens appended to keyboard patterns
    pub keyboard_number_tokens: usize,
}

impl Default for PassLimits {
    fn default() -> Self {
        Self {
            common_password_words: 5,
            brand_words: 3,
            keyboard_number_tokens: 5,
        }
    }
}

/// Toggles and bounds for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub include_special_chars: bool,
    pub include_numbers: bool,
    pub include_leet_speak: bool,
    pub include_dates: bool,
    pub include_reversed: bool,
    pub include_combinations: bool,

    pub include_common_passwords: bool,
    pub include_keyboard_patterns: bool,
    pub include_brand_names: bool,
    /// Seasons are always part of the base words; kept for round-tripping.
    pub include_seasons: bool,
    /// Colors are always part of the base words; kept for round-tripping.
    pub include_colors: bool,
    /// Reserved, no pass reads it.
    pub include_phrases: bool,

    pub min_length: usize,
    pub max_length: usize,

    pub limits: PassLimits,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_special_chars: true,
            include_numbers: true,
            include_leet_speak: true,
            include_dates: true,
            include_reversed: true,
            include_combinations: true,
            include_common_passwords: true,
            include_keyboard_patterns: true,
            include_brand_names: true,
            include_seasons: true,
            include_colors: true,
            include_phrases: false,
            min_length: 6,
            max_length: 16,
            limits: PassLimits::default(),
        }
    }
}

impl GenerationOptions {
    /// Largest accepted `max_length`
    pub const MAX_LENGTH_LIMIT: usize = 100;

    /// Every toggle off, bounds kept
    pub fn none(min_length: usize, max_length: usize) -> Self {
        Self {
            include_special_chars: false,
            include_numbers: false,
            include_leet_speak: false,
            include_dates: false,
            include_reversed: false,
            include_combinations: false,
            include_common_passwords: false,
            include_keyboard_patterns: false,
            include_brand_names: false,
            include_seasons: false,
            include_colors: false,
            include_phrases: false,
            min_length,
            max_length,
            limits: PassLimits::default(),
        }
    }

    /// Check the length bounds before a run.
    ///
    /// The engine itself accepts any bounds; inverted bounds simply produce an
    /// empty wordlist.
    pub fn validate(&self) -> crate::Result<()> {
        if self.min_length < 1 {
            return Err(crate::validation_error!("Minimum length must be at least 1"));
        }
        if self.max_length < self.min_length {
            return Err(crate::validation_error!(
                "Maximum length ({}) cannot be smaller than minimum length ({})",
                self.max_length,
                self.min_length
            ));
        }
        if self.max_length > Self::MAX_LENGTH_LIMIT {
            return Err(crate::validation_error!(
                "Maximum length cannot exceed {}",
                Self::MAX_LENGTH_LIMIT
            ));
        }
        Ok(())
    }

    /// Names of the enabled `include_*` toggles
    pub fn active_toggles(&self) -> Vec<&'static str> {
        [
            ("include_special_chars", self.include_special_chars),
            ("include_numbers", self.include_numbers),
            ("include_leet_speak", self.include_leet_speak),
            ("include_dates", self.include_dates),
            ("include_reversed", self.include_reversed),
            ("include_combinations", self.include_combinations),
            ("include_common_passwords", self.include_common_passwords),
            ("include_keyboard_patterns", self.include_keyboard_patterns),
            ("include_brand_names", self.include_brand_names),
            ("include_seasons", self.include_seasons),
            ("include_colors", self.include_colors),
            ("include_phrases", self.include_phrases),
        ]
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| name)
        .collect()
    }

    /// True when `candidate` satisfies the length bounds
    pub fn accepts_length(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        len >= self.min_length && len <= self.max_length
    }
}

/// Final artifact of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWordlist {
    pub passwords: Vec<String>,
    pub count: usize,
    pub generated_at: DateTime<Utc>,
    pub target_profile: ProfileRecord,
    pub options: GenerationOptions,
    /// Number of base words the run started from
    #[serde(default)]
    pub base_words_count: usize,
    /// Candidates produced before the length filter
    #[serde(default)]
    pub total_before_filter: usize,
}

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_handles_order() {
        let mut social = SocialHandles::default();
        social.insert("mastodon", "@alex@infosec.exchange");
        social.insert("github", "alexdev");
        social.insert("instagram", "alex.ig");

        let filled: Vec<_> = social.iter().filter(|(_, r)| !r.is_empty()).collect();
        assert_eq!(
            filled,
            vec![
                ("instagram", "alex.ig"),
                ("github", "alexdev"),
                ("mastodon", "@alex@infosec.exchange"),
            ]
        );
        assert_eq!(social.get("GitHub"), Some("alexdev"));
    }

    #[test]
    fn test_social_handles_deserialize_extra_platforms() {
        let social: SocialHandles =
            serde_json::from_str(r#"{"twitter": "@alex", "bluesky": "alex.bsky"}"#).unwrap();
        assert_eq!(social.twitter, "@alex");
        assert_eq!(social.other.get("bluesky").map(String::as_str), Some("alex.bsky"));
    }

    #[test]
    fn test_options_validate() {
        assert!(GenerationOptions::default().validate().is_ok());
        assert!(GenerationOptions::none(0, 8).validate().is_err());
        assert!(GenerationOptions::none(9, 8).validate().is_err());
        assert!(GenerationOptions::none(4, 101).validate().is_err());
    }

    #[test]
    fn test_options_partial_json_uses_defaults() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{"include_numbers": false, "max_length": 12}"#).unwrap();
        assert!(!options.include_numbers);
        assert!(options.include_dates);
        assert_eq!(options.min_length, 6);
        assert_eq!(options.max_length, 12);
        assert_eq!(options.limits, PassLimits::default());
    }

    #[test]
    fn test_accepts_length_counts_chars() {
        let options = GenerationOptions::none(4, 5);
        assert!(options.accepts_length("abcd"));
        assert!(options.accepts_length("äbcde"));
        assert!(!options.accepts_length("abc"));
        assert!(!options.accepts_length("abcdef"));
    }

    #[test]
    fn test_active_toggles() {
        let mut options = GenerationOptions::none(4, 8);
        options.include_numbers = true;
        assert_eq!(options.active_toggles(), vec!["include_numbers"]);
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(format!("{:?}", OutputFormat::Json), "Json");
    }
}
