//! Wordlist export and terminal presentation

mod view;

pub use view::{ViewStats, WordlistView};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};
use crate::types::{GeneratedWordlist, OutputFormat, ProfileRecord};

lazy_static! {
    /// Characters that are unsafe in file names on common platforms
    static ref UNSAFE_FILENAME_CHARS: Regex =
        Regex::new(r#"[<>:"/\\|?*]"#).expect("Could not compile regex");
}

const SPECIAL_CHARS: &str = "!@#$%^&*?~";

/// Replace unsafe characters, trim spaces and dots, fall back to `wordlist`
pub fn sanitize_filename(filename: &str) -> String {
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(filename, "_");
    let trimmed = cleaned.trim_matches(|c: char| c == ' ' || c == '.');
    if trimmed.is_empty() {
        "wordlist".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Download-style file name derived from the target's first name
pub fn export_filename(profile: &ProfileRecord, format: OutputFormat) -> String {
    let name = profile.first_name.trim();
    let name = if name.is_empty() { "target" } else { name };
    format!("{}_wordlist.{}", sanitize_filename(name), format.extension())
}

/// Rough character-class bucket used in CSV exports
pub fn categorize_password(password: &str) -> &'static str {
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    match (has_digit, has_special) {
        (true, true) => "complex",
        (true, false) => "alphanumeric",
        (false, true) => "alpha_special",
        (false, false) => "alphabetic",
    }
}

/// Append the format's extension when the path lacks it
pub fn with_extension(path: &Path, format: OutputFormat) -> PathBuf {
    let ext = format.extension();
    let has_ext = path
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case(ext));
    if has_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    passwords: &'a [String],
    count: usize,
    generated_at: String,
    target_profile: &'a ProfileRecord,
    options: &'a crate::types::GenerationOptions,
    statistics: JsonStatistics,
}

#[derive(Serialize)]
struct JsonStatistics {
    base_words_count: usize,
    total_before_filter: usize,
}

/// Writes wordlists to disk and prints summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputManager {
    format: OutputFormat,
    verbose: bool,
}

impl OutputManager {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Save the wordlist and return the path actually written
    pub fn save(&self, wordlist: &GeneratedWordlist, path: &Path) -> Result<PathBuf> {
        let path = with_extension(path, self.format);
        let io_err = |e: std::io::Error| ForgeError::io(e.to_string(), Some(path.display().to_string()));

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);

        match self.format {
            OutputFormat::Txt => {
                for password in &wordlist.passwords {
                    writeln!(writer, "{}", password).map_err(io_err)?;
                }
            }
            OutputFormat::Csv => {
                writeln!(writer, "password,length,category").map_err(io_err)?;
                for password in &wordlist.passwords {
                    writeln!(
                        writer,
                        "{},{},{}",
                        csv_field(password),
                        password.chars().count(),
                        categorize_password(password)
                    )
                    .map_err(io_err)?;
                }
            }
            OutputFormat::Json => {
                let export = JsonExport {
                    passwords: &wordlist.passwords,
                    count: wordlist.count,
                    generated_at: wordlist.generated_at.to_rfc3339(),
                    target_profile: &wordlist.target_profile,
                    options: &wordlist.options,
                    statistics: JsonStatistics {
                        base_words_count: wordlist.base_words_count,
                        total_before_filter: wordlist.total_before_filter,
                    },
                };
                serde_json::to_writer_pretty(&mut writer, &export)?;
                writeln!(writer).map_err(io_err)?;
            }
        }

        writer.flush().map_err(io_err)?;
        tracing::debug!(path = %path.display(), format = %self.format, count = wordlist.count, "Saved wordlist");

        if self.verbose {
            println!("💾 Saved {} passwords to {}", wordlist.count, path.display());
        }
        Ok(path)
    }

    /// Print the first `limit` passwords
    pub fn preview(&self, wordlist: &GeneratedWordlist, limit: usize) {
        let total = wordlist.passwords.len();

        println!();
        println!("🔍 Wordlist Preview");
        println!("═══════════════════");
        println!("📊 Total passwords: {}", total);
        println!("👀 Showing first {} passwords:", limit.min(total));
        println!();

        for (i, password) in wordlist.passwords.iter().take(limit).enumerate() {
            println!("   {:2}. {}", i + 1, password);
        }

        if total > limit {
            println!();
            println!("   ... and {} more passwords", total - limit);
        }

        println!();
        println!("⚡ Run without --preview to write the full wordlist");
    }

    /// Print counts and length distribution
    pub fn statistics(&self, wordlist: &GeneratedWordlist) {
        let stats = WordlistView::new(wordlist).stats();

        println!();
        println!("📈 Generation Statistics:");
        println!("   Base words extracted: {}", wordlist.base_words_count);
        println!("   Total combinations generated: {}", wordlist.total_before_filter);
        println!("   Final passwords (after filtering): {}", wordlist.count);
        if stats.total > 0 {
            println!("   Password length range: {} - {}", stats.min_length, stats.max_length);
            println!("   Average password length: {:.1}", stats.avg_length);
            println!("   Most common length: {}", stats.most_common_length);
        }
        println!("   Active generation options: {}", wordlist.options.active_toggles().len());
        println!(
            "   Generation completed: {}",
            wordlist.generated_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

/// Quote a CSV field when it contains a separator, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
