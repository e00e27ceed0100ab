//! Combination engine: turns base words into raw password candidates
//!
//! Passes run in a fixed order against a shared [`CandidateSet`]. Each pass only
//! ever adds candidates. The leet pass reads a snapshot of what the basic and
//! date passes produced, so the order cannot change.

use std::collections::HashSet;

use serde::Serialize;

use super::base_words::BaseWordSet;
use super::vocab::{
    to_leet_speak, BRAND_NAMES, COMMON_PASSWORDS, KEYBOARD_PATTERNS, NUMBERS, SPECIAL_CHARS, YEARS,
};
use crate::types::{GenerationOptions, ProfileRecord};

/// Growing set of unique candidates
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    inner: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the candidate was new
    pub fn insert(&mut self, candidate: impl Into<String>) -> bool {
        self.inner.insert(candidate.into())
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.inner.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.inner.iter()
    }

    /// Copy of the current contents, detached from later inserts
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.iter().cloned().collect()
    }
}

/// One generation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    Basic,
    Dates,
    LeetSpeak,
    Reversed,
    CommonPasswords,
    KeyboardPatterns,
    BrandNames,
}

impl Pass {
    /// All passes in execution order
    pub const ORDER: [Pass; 7] = [
        Pass::Basic,
        Pass::Dates,
        Pass::LeetSpeak,
        Pass::Reversed,
        Pass::CommonPasswords,
        Pass::KeyboardPatterns,
        Pass::BrandNames,
    ];

    /// Whether the options switch this pass on
    pub fn is_enabled(&self, options: &GenerationOptions) -> bool {
        match self {
            Pass::Basic => true,
            Pass::Dates => options.include_dates,
            Pass::LeetSpeak => options.include_leet_speak,
            Pass::Reversed => options.include_reversed,
            Pass::CommonPasswords => options.include_common_passwords,
            Pass::KeyboardPatterns => options.include_keyboard_patterns,
            Pass::BrandNames => options.include_brand_names,
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::Basic => write!(f, "basic"),
            Pass::Dates => write!(f, "dates"),
            Pass::LeetSpeak => write!(f, "leet"),
            Pass::Reversed => write!(f, "reversed"),
            Pass::CommonPasswords => write!(f, "common"),
            Pass::KeyboardPatterns => write!(f, "keyboard"),
            Pass::BrandNames => write!(f, "brands"),
        }
    }
}

/// Candidates contributed by one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassStat {
    pub pass: Pass,
    /// New candidates, duplicates of earlier passes excluded
    pub added: usize,
    /// Accumulator size after the pass
    pub total: usize,
}

/// Per-pass breakdown of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub passes: Vec<PassStat>,
}

impl GenerationReport {
    pub fn added_by(&self, pass: Pass) -> Option<usize> {
        self.passes.iter().find(|s| s.pass == pass).map(|s| s.added)
    }

    pub fn total(&self) -> usize {
        self.passes.last().map_or(0, |s| s.total)
    }
}

/// Run every enabled pass and return the raw candidate set
pub fn generate(
    base_words: &BaseWordSet,
    profile: &ProfileRecord,
    options: &GenerationOptions,
) -> CandidateSet {
    generate_with_report(base_words, profile, options, |_| {}).0
}

/// Same as [`generate`], also reporting each pass to `on_pass` as it finishes
pub fn generate_with_report<F>(
    base_words: &BaseWordSet,
    profile: &ProfileRecord,
    options: &GenerationOptions,
    mut on_pass: F,
) -> (CandidateSet, GenerationReport)
where
    F: FnMut(&PassStat),
{
    let mut candidates = CandidateSet::new();
    let mut report = GenerationReport::default();

    for pass in Pass::ORDER {
        if !pass.is_enabled(options) {
            continue;
        }

        let before = candidates.len();
        match pass {
            Pass::Basic => basic_pass(base_words, options, &mut candidates),
            Pass::Dates => date_pass(base_words, profile, &mut candidates),
            Pass::LeetSpeak => leet_pass(&mut candidates),
            Pass::Reversed => reversed_pass(base_words, options, &mut candidates),
            Pass::CommonPasswords => common_password_pass(base_words, options, &mut candidates),
            Pass::KeyboardPatterns => keyboard_pass(options, &mut candidates),
            Pass::BrandNames => brand_pass(base_words, options, &mut candidates),
        }

        let stat = PassStat {
            pass,
            added: candidates.len() - before,
            total: candidates.len(),
        };
        tracing::debug!(pass = %stat.pass, added = stat.added, total = stat.total, "Pass complete");
        on_pass(&stat);
        report.passes.push(stat);
    }

    (candidates, report)
}

/// Words themselves, numeric and special affixes, and pairwise joins
fn basic_pass(base_words: &BaseWordSet, options: &GenerationOptions, out: &mut CandidateSet) {
    let combine = options.include_combinations && base_words.len() > 1;

    for word in base_words {
        out.insert(word.as_str());

        if options.include_numbers {
            for num in NUMBERS {
                out.insert(format!("{}{}", word, num));
                out.insert(format!("{}{}", num, word));
            }
        }

        if options.include_special_chars {
            for ch in SPECIAL_CHARS {
                out.insert(format!("{}{}", word, ch));
                out.insert(format!("{}{}", ch, word));
            }
        }

        if combine {
            for other in base_words {
                if word != other {
                    out.insert(format!("{}{}", word, other));
                    out.insert(format!("{}_{}", word, other));
                    out.insert(format!("{}.{}", word, other));
                }
            }
        }
    }
}

/// Fragments of a DDMMYYYY date: year, month, day, short year, MMDD, DDMM.
///
/// Returns `None` unless the string is exactly eight characters.
pub fn date_variants(date: &str) -> Option<[String; 6]> {
    let chars: Vec<char> = date.chars().collect();
    if chars.len() != 8 {
        return None;
    }

    let part = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    let day = part(0..2);
    let month = part(2..4);
    let year = part(4..8);
    let short_year = part(6..8);

    Some([
        year,
        month.clone(),
        day.clone(),
        short_year,
        format!("{}{}", month, day),
        format!("{}{}", day, month),
    ])
}

fn date_pass(base_words: &BaseWordSet, profile: &ProfileRecord, out: &mut CandidateSet) {
    let variants: Vec<[String; 6]> = profile
        .birth_dates()
        .into_iter()
        .filter_map(date_variants)
        .collect();

    for date in &variants {
        for word in base_words {
            for variant in date {
                out.insert(format!("{}{}", word, variant));
                out.insert(format!("{}{}", variant, word));
                out.insert(format!("{}_{}", word, variant));
            }
        }
    }

    for year in YEARS {
        for word in base_words {
            out.insert(format!("{}{}", word, year));
            out.insert(format!("{}{}", year, word));
        }
    }
}

fn leet_pass(out: &mut CandidateSet) {
    for candidate in out.snapshot() {
        let leet = to_leet_speak(&candidate);
        if leet != candidate {
            out.insert(leet);
        }
    }
}

fn reversed_pass(base_words: &BaseWordSet, options: &GenerationOptions, out: &mut CandidateSet) {
    for word in base_words {
        let reversed: String = word.chars().rev().collect();

        if options.include_numbers {
            for num in NUMBERS {
                out.insert(format!("{}{}", reversed, num));
            }
        }

        out.insert(reversed);
    }
}

fn common_password_pass(
    base_words: &BaseWordSet,
    options: &GenerationOptions,
    out: &mut CandidateSet,
) {
    let words = base_words.first(options.limits.common_password_words);

    for common in COMMON_PASSWORDS {
        out.insert(*common);

        for word in words {
            out.insert(format!("{}{}", common, word));
            out.insert(format!("{}{}", word, common));
            out.insert(format!("{}_{}", common, word));
        }
    }
}

fn keyboard_pass(options: &GenerationOptions, out: &mut CandidateSet) {
    let take = options.limits.keyboard_number_tokens.min(NUMBERS.len());

    for pattern in KEYBOARD_PATTERNS {
        out.insert(*pattern);

        if options.include_numbers {
            for num in &NUMBERS[..take] {
                out.insert(format!("{}{}", pattern, num));
            }
        }
    }
}

fn brand_pass(base_words: &BaseWordSet, options: &GenerationOptions, out: &mut CandidateSet) {
    let words = base_words.first(options.limits.brand_words);

    for brand in BRAND_NAMES {
        out.insert(*brand);

        for word in words {
            out.insert(format!("{}{}", brand, word));
            out.insert(format!("{}{}", word, brand));
        }
    }
}
