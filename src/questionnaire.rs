//! Interactive target data collection

use chrono::NaiveDate;
use inquire::{Confirm, Text};

use crate::config::TargetConfig;
use crate::error::Result;
use crate::types::{GenerationOptions, ProfileRecord, ReconFacts, SocialHandles};

/// True for a real calendar date written as DDMMYYYY
pub fn is_valid_date(input: &str) -> bool {
    if input.len() != 8 || !input.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let (day, month, year) = (&input[0..2], &input[2..4], &input[4..8]);
    match (day.parse::<u32>(), month.parse::<u32>(), year.parse::<i32>()) {
        (Ok(d), Ok(m), Ok(y)) => NaiveDate::from_ymd_opt(y, m, d).is_some(),
        _ => false,
    }
}

/// Split a comma-separated answer into trimmed, non-empty items
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Walks the user through every section of a target
pub struct DataCollector {
    quiet: bool,
}

impl DataCollector {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Collect personal info, social handles, recon facts and options
    pub fn collect_all(&self) -> Result<TargetConfig> {
        if !self.quiet {
            println!("🎯 Target Intelligence Gathering");
            println!("📝 Press Enter to skip optional fields");
            println!();
        }

        let config = TargetConfig {
            personal_info: self.collect_personal_info()?,
            social_media: self.collect_social_media()?,
            recon_info: self.collect_recon_info()?,
            options: self.collect_options()?,
        };

        if !self.quiet {
            println!();
            println!("✅ Data collection complete!");
        }
        Ok(config)
    }

    fn section(&self, title: &str) {
        if !self.quiet {
            println!();
            println!("{}", title);
            println!("───────────────────────");
        }
    }

    fn collect_personal_info(&self) -> Result<ProfileRecord> {
        self.section("👤 Personal Information");

        let mut info = ProfileRecord {
            first_name: prompt_required("First name:")?,
            last_name: prompt("Last name:")?,
            nickname: prompt("Nickname/Username:")?,
            birth_date: prompt_date("Birth date (DDMMYYYY):")?,
            ..Default::default()
        };

        if confirm("Does the target have a partner/spouse?", false)? {
            info.partner_name = prompt("Partner's name:")?;
            info.partner_nickname = prompt("Partner's nickname:")?;
            info.partner_birth_date = prompt_date("Partner's birth date (DDMMYYYY):")?;
        }

        if confirm("Does the target have children?", false)? {
            info.child_name = prompt("Child's name:")?;
            info.child_nickname = prompt("Child's nickname:")?;
            info.child_birth_date = prompt_date("Child's birth date (DDMMYYYY):")?;
        }

        info.pet_name = prompt("Pet name:")?;
        info.company_name = prompt("Company name:")?;
        info.keywords = split_list(&prompt("Additional keywords (comma-separated):")?);

        Ok(info)
    }

    fn collect_social_media(&self) -> Result<SocialHandles> {
        self.section("📱 Social Media Intelligence");

        let mut social = SocialHandles::default();
        for (platform, label) in SocialHandles::PLATFORMS {
            social.insert(platform, prompt(&format!("{}:", label))?);
        }
        Ok(social)
    }

    fn collect_recon_info(&self) -> Result<ReconFacts> {
        self.section("🔍 Advanced Reconnaissance");

        Ok(ReconFacts {
            email: prompt("Email address:")?,
            phone_number: prompt("Phone number:")?,
            address: prompt("Address/Location:")?,
            university: prompt("University/School:")?,
            hobbies: split_list(&prompt("Hobbies/Interests (comma-separated):")?),
            favorite_teams: split_list(&prompt("Favorite sports teams (comma-separated):")?),
            favorite_movies: split_list(&prompt("Favorite movies (comma-separated):")?),
            favorite_books: split_list(&prompt("Favorite books (comma-separated):")?),
            favorite_games: split_list(&prompt("Favorite games (comma-separated):")?),
        })
    }

    fn collect_options(&self) -> Result<GenerationOptions> {
        self.section("⚙️  Generation Options");

        let defaults = GenerationOptions::default();
        let mut options = GenerationOptions {
            include_special_chars: confirm("Include special characters (!@#$%)?", true)?,
            include_numbers: confirm("Include numbers?", true)?,
            include_leet_speak: confirm("Include leet speak (4 for a, 3 for e)?", true)?,
            include_dates: confirm("Include date combinations?", true)?,
            include_reversed: confirm("Include reversed words?", true)?,
            include_combinations: confirm("Include word combinations?", true)?,
            ..defaults
        };

        if confirm("Configure advanced options?", false)? {
            options.include_common_passwords = confirm("Include common passwords?", true)?;
            options.include_keyboard_patterns = confirm("Include keyboard patterns?", true)?;
            options.include_brand_names = confirm("Include brand names?", true)?;
            options.include_seasons = confirm("Include seasons?", true)?;
            options.include_colors = confirm("Include colors?", true)?;
            options.include_phrases = confirm("Include phrases?", false)?;
        }

        Ok(options)
    }
}

fn prompt(label: &str) -> Result<String> {
    Ok(Text::new(label).prompt()?.trim().to_string())
}

fn prompt_required(label: &str) -> Result<String> {
    loop {
        let value = prompt(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("   ❌ This field is required!");
    }
}

fn prompt_date(label: &str) -> Result<String> {
    loop {
        let value = prompt(label)?;
        if value.is_empty() || is_valid_date(&value) {
            return Ok(value);
        }
        println!("   ❌ Invalid date format! Use DDMMYYYY (e.g., 15061990)");
    }
}

fn confirm(label: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new(label).with_default(default).prompt()?)
}
