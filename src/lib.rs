//! Wordlist Forge - target-profile password wordlist generation
//!
//! Turns a handful of facts about a person (names, dates, handles, interests)
//! into a deduplicated, length-filtered candidate password list for
//! authorized security testing.

pub mod config;
pub mod error;
pub mod output;
pub mod questionnaire;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use config::TargetConfig;
pub use error::{ForgeError, Result};
pub use types::{
    GeneratedWordlist, GenerationOptions, OutputFormat, PassLimits, ProfileRecord, ReconFacts,
    SocialHandles,
};

// Re-export main functionality
pub use output::{OutputManager, WordlistView};
pub use wordlist::{GenerationReport, WordlistGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
