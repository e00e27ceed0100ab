//! Search and length filtering over a generated wordlist

use std::collections::BTreeMap;

use crate::types::GeneratedWordlist;

/// Filtered view of a wordlist, as shown to the user
#[derive(Debug, Clone)]
pub struct WordlistView<'a> {
    wordlist: &'a GeneratedWordlist,
    search: Option<String>,
    length: Option<usize>,
}

/// Summary numbers for a set of passwords
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStats {
    pub total: usize,
    pub min_length: usize,
    pub max_length: usize,
    /// Rounded to one decimal
    pub avg_length: f64,
    pub most_common_length: usize,
}

impl<'a> WordlistView<'a> {
    pub fn new(wordlist: &'a GeneratedWordlist) -> Self {
        Self {
            wordlist,
            search: None,
            length: None,
        }
    }

    /// Case-insensitive substring filter; empty input clears it
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().to_lowercase();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    /// Keep only passwords of exactly this many characters
    pub fn with_length(mut self, length: Option<usize>) -> Self {
        self.length = length;
        self
    }

    fn matches(&self, password: &str) -> bool {
        let matches_search = self
            .search
            .as_ref()
            .map_or(true, |term| password.to_lowercase().contains(term.as_str()));
        let matches_length = self
            .length
            .map_or(true, |len| password.chars().count() == len);
        matches_search && matches_length
    }

    pub fn passwords(&self) -> Vec<&'a str> {
        self.wordlist
            .passwords
            .iter()
            .map(String::as_str)
            .filter(|p| self.matches(p))
            .collect()
    }

    /// Line-joined export, one password per line
    pub fn to_text(&self) -> String {
        self.passwords().join("\n")
    }

    /// Copy of the wordlist holding only the filtered passwords
    pub fn to_wordlist(&self) -> GeneratedWordlist {
        let passwords: Vec<String> = self.passwords().into_iter().map(str::to_string).collect();
        GeneratedWordlist {
            count: passwords.len(),
            passwords,
            generated_at: self.wordlist.generated_at,
            target_profile: self.wordlist.target_profile.clone(),
            options: self.wordlist.options.clone(),
            base_words_count: self.wordlist.base_words_count,
            total_before_filter: self.wordlist.total_before_filter,
        }
    }

    /// Distinct lengths present in the filtered list, ascending
    pub fn unique_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .passwords()
            .iter()
            .map(|p| p.chars().count())
            .collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }

    pub fn stats(&self) -> ViewStats {
        let lengths: Vec<usize> = self.passwords().iter().map(|p| p.chars().count()).collect();
        if lengths.is_empty() {
            return ViewStats {
                total: 0,
                min_length: 0,
                max_length: 0,
                avg_length: 0.0,
                most_common_length: 0,
            };
        }

        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for len in &lengths {
            *counts.entry(*len).or_default() += 1;
        }
        // ties go to the shorter length
        let most_common_length = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map_or(0, |(len, _)| *len);

        let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

        ViewStats {
            total: lengths.len(),
            min_length: lengths.iter().copied().min().unwrap_or(0),
            max_length: lengths.iter().copied().max().unwrap_or(0),
            avg_length: (avg * 10.0).round() / 10.0,
            most_common_length,
        }
    }
}
