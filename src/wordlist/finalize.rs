//! Length filtering and packaging of the final wordlist

use chrono::Utc;

use super::engine::CandidateSet;
use crate::types::{GeneratedWordlist, GenerationOptions, ProfileRecord};

/// Keep candidates within the length bounds, sorted lexicographically.
///
/// Inverted bounds yield an empty list rather than an error.
pub fn finalize(
    candidates: &CandidateSet,
    options: &GenerationOptions,
    profile: &ProfileRecord,
) -> GeneratedWordlist {
    let mut passwords: Vec<String> = candidates
        .iter()
        .filter(|candidate| options.accepts_length(candidate))
        .cloned()
        .collect();
    passwords.sort_unstable();

    GeneratedWordlist {
        count: passwords.len(),
        passwords,
        generated_at: Utc::now(),
        target_profile: profile.clone(),
        options: options.clone(),
        base_words_count: 0,
        total_before_filter: candidates.len(),
    }
}
