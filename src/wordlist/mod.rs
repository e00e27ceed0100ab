//! Wordlist generation pipeline
//!
//! extract base words -> run combination passes -> filter, sort and package.

pub mod base_words;
pub mod engine;
pub mod finalize;
pub mod identifier;
pub mod vocab;

pub use base_words::{capitalize, extract, BaseWordSet};
pub use engine::{generate, CandidateSet, GenerationReport, Pass, PassStat};
pub use finalize::finalize;
pub use identifier::extract_username;

use std::time::Instant;

use crate::types::{GeneratedWordlist, GenerationOptions, ProfileRecord, ReconFacts, SocialHandles};

/// Runs the full pipeline for one target
#[derive(Debug, Clone, Default)]
pub struct WordlistGenerator {
    options: GenerationOptions,
}

impl WordlistGenerator {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate the wordlist for a target
    pub fn generate(
        &self,
        profile: &ProfileRecord,
        social: &SocialHandles,
        recon: &ReconFacts,
    ) -> GeneratedWordlist {
        self.generate_with_report(profile, social, recon, |_| {}).0
    }

    /// Generate the wordlist and a per-pass breakdown, calling `on_pass` after
    /// every executed pass
    pub fn generate_with_report<F>(
        &self,
        profile: &ProfileRecord,
        social: &SocialHandles,
        recon: &ReconFacts,
        on_pass: F,
    ) -> (GeneratedWordlist, GenerationReport)
    where
        F: FnMut(&PassStat),
    {
        let start = Instant::now();

        let base_words = extract(profile, social, recon);
        tracing::debug!(base_words = base_words.len(), "Extracted base words");

        let (candidates, report) =
            engine::generate_with_report(&base_words, profile, &self.options, on_pass);

        let mut wordlist = finalize(&candidates, &self.options, profile);
        wordlist.base_words_count = base_words.len();

        tracing::info!(
            base_words = wordlist.base_words_count,
            candidates = wordlist.total_before_filter,
            passwords = wordlist.count,
            min_length = self.options.min_length,
            max_length = self.options.max_length,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Wordlist generated"
        );

        (wordlist, report)
    }
}
