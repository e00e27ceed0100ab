//! Target files for batch mode

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ForgeError, Result};
use crate::types::{GenerationOptions, ProfileRecord, ReconFacts, SocialHandles};

/// Everything a run needs, as stored in a JSON target file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub personal_info: ProfileRecord,
    pub social_media: SocialHandles,
    pub recon_info: ReconFacts,
    pub options: GenerationOptions,
}

impl TargetConfig {
    /// Load a target file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ForgeError::parse(format!("Invalid JSON in target file: {}", e), Some(content))
        })?;

        tracing::debug!(path = %path.display(), "Loaded target file");
        Ok(config)
    }

    /// Write the target file as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            ForgeError::internal(format!("Failed to serialize target: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Example target used by `--sample-config`
    pub fn sample() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let mut social_media = SocialHandles::default();
        for (platform, reference) in [
            ("instagram", "john_doe_90"),
            ("facebook", "john.doe.90"),
            ("twitter", "johndoe"),
            ("linkedin", "john-doe-security"),
            ("github", "johndoe90"),
            ("reddit", "johnny90"),
            ("discord", "johndoe#1234"),
            ("telegram", "johndoe90"),
        ] {
            social_media.insert(platform, reference);
        }

        Self {
            personal_info: ProfileRecord {
                first_name: "john".to_string(),
                last_name: "doe".to_string(),
                nickname: "johnny".to_string(),
                birth_date: "15061990".to_string(),
                partner_name: "jane".to_string(),
                pet_name: "buddy".to_string(),
                company_name: "techcorp".to_string(),
                keywords: strings(&["hacker", "security", "crypto"]),
                ..Default::default()
            },
            social_media,
            recon_info: ReconFacts {
                email: "john.doe@email.com".to_string(),
                phone_number: "+1234567890".to_string(),
                address: "New York".to_string(),
                university: "MIT".to_string(),
                hobbies: strings(&["gaming", "coding", "cybersecurity"]),
                favorite_teams: strings(&["Yankees", "Lakers"]),
                favorite_movies: strings(&["Matrix", "Hackers"]),
                favorite_books: strings(&["1984", "Neuromancer"]),
                favorite_games: strings(&["Counter-Strike", "Minecraft"]),
            },
            options: GenerationOptions {
                min_length: 4,
                max_length: 25,
                ..Default::default()
            },
        }
    }
}
