//! Integration tests for wordlist-forge

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashSet;
use wordlist_forge::{
    wordlist::{extract, extract_username, generate},
    GenerationOptions, ProfileRecord, ReconFacts, SocialHandles, TargetConfig, WordlistGenerator,
};

fn only_numbers(min_length: usize, max_length: usize) -> GenerationOptions {
    let mut options = GenerationOptions::none(min_length, max_length);
    options.include_numbers = true;
    options
}

fn run(target: &TargetConfig) -> Vec<String> {
    WordlistGenerator::new(target.options.clone())
        .generate(&target.personal_info, &target.social_media, &target.recon_info)
        .passwords
}

#[test]
fn test_alex_numbers_scenario() {
    let generator = WordlistGenerator::new(only_numbers(4, 8));
    let list = generator.generate(
        &ProfileRecord::named("Alex"),
        &SocialHandles::default(),
        &ReconFacts::default(),
    );
    let passwords: HashSet<&str> = list.passwords.iter().map(String::as_str).collect();

    for digit in 0..10 {
        assert!(passwords.contains(format!("alex{}", digit).as_str()));
        assert!(passwords.contains(format!("Alex{}", digit).as_str()));
    }
    assert!(passwords.contains("alex00"));
    assert!(passwords.contains("alex123"));
    assert!(passwords.contains("321Alex"));
    assert!(passwords.contains("alex"));
    // "autumn" + "123" is nine characters
    assert!(!passwords.contains("autumn123"));
    assert!(passwords.iter().all(|p| (4..=8).contains(&p.chars().count())));
    assert_eq!(list.count, list.passwords.len());
}

#[test]
fn test_date_decomposition() {
    let mut options = GenerationOptions::none(1, 64);
    options.include_dates = true;
    let profile = ProfileRecord {
        first_name: "alex".to_string(),
        birth_date: "15071990".to_string(),
        ..Default::default()
    };

    let base_words = extract(&profile, &SocialHandles::default(), &ReconFacts::default());
    let candidates = generate(&base_words, &profile, &options);

    for expected in ["alex1990", "1990alex", "alex90", "alex15", "alex07", "alex_1990"] {
        assert!(candidates.contains(expected), "missing {}", expected);
    }
}

#[test]
fn test_identifier_extraction_cases() {
    assert_eq!(extract_username("https://instagram.com/janedoe123/"), "janedoe123");
    assert_eq!(extract_username("@janedoe123"), "janedoe123");
    assert_eq!(extract_username("janedoe123"), "janedoe123");
}

#[test]
fn test_output_invariants_on_sample_target() {
    let target = TargetConfig::sample();
    let passwords = run(&target);

    assert!(!passwords.is_empty());
    assert!(passwords.windows(2).all(|w| w[0] < w[1]), "not strictly sorted");
    let unique: HashSet<&String> = passwords.iter().collect();
    assert_eq!(unique.len(), passwords.len());
    assert!(passwords.iter().all(|p| target.options.accepts_length(p)));
}

#[test]
fn test_generation_is_deterministic() {
    let target = TargetConfig::sample();
    assert_eq!(run(&target), run(&target));
}

#[test]
fn test_disabling_a_toggle_never_adds_candidates() {
    let mut full = TargetConfig::sample();
    full.options.include_phrases = true;
    let all: HashSet<String> = run(&full).into_iter().collect();

    let toggles: [fn(&mut GenerationOptions); 12] = [
        |o| o.include_special_chars = false,
        |o| o.include_numbers = false,
        |o| o.include_leet_speak = false,
        |o| o.include_dates = false,
        |o| o.include_reversed = false,
        |o| o.include_combinations = false,
        |o| o.include_common_passwords = false,
        |o| o.include_keyboard_patterns = false,
        |o| o.include_brand_names = false,
        |o| o.include_seasons = false,
        |o| o.include_colors = false,
        |o| o.include_phrases = false,
    ];

    for disable in toggles {
        let mut target = full.clone();
        disable(&mut target.options);
        let reduced = run(&target);
        assert!(reduced.len() <= all.len());
        assert!(reduced.iter().all(|p| all.contains(p)));
    }
}

#[test]
fn test_vocabulary_toggles_leave_output_unchanged() {
    let target = TargetConfig::sample();
    let baseline = run(&target);
    assert!(baseline.contains(&"winter".to_string()));
    assert!(baseline.contains(&"purple".to_string()));

    let toggles: [fn(&mut GenerationOptions); 3] = [
        |o| o.include_seasons = !o.include_seasons,
        |o| o.include_colors = !o.include_colors,
        |o| o.include_phrases = !o.include_phrases,
    ];

    for flip in toggles {
        let mut flipped = target.clone();
        flip(&mut flipped.options);
        assert_eq!(run(&flipped), baseline);
    }

    let mut bare = TargetConfig::default();
    bare.options = GenerationOptions::none(1, 32);
    let passwords = run(&bare);
    assert!(passwords.contains(&"winter".to_string()));
    assert!(passwords.contains(&"purple".to_string()));
}

#[test]
fn test_leet_toggle_controls_leet_candidates() {
    let mut target = TargetConfig::default();
    target.personal_info.first_name = "Alex".to_string();
    target.options = GenerationOptions::none(1, 32);

    assert!(!run(&target).contains(&"413x".to_string()));
    target.options.include_leet_speak = true;
    assert!(run(&target).contains(&"413x".to_string()));
}

#[test]
fn test_inverted_bounds_produce_empty_list() {
    let mut target = TargetConfig::sample();
    target.options.min_length = 10;
    target.options.max_length = 4;
    assert!(run(&target).is_empty());
}

#[test]
fn test_cli_batch_requires_config() {
    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["--batch", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Batch mode requires --config"));
}

#[test]
fn test_cli_sample_config_then_generate() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.json");
    let output = dir.path().join("john.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("--sample-config")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("authorized security testing only"));
    assert!(target.exists());

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("--config")
        .arg(&target)
        .arg("--output")
        .arg(&output)
        .args(["--min-length", "6", "--max-length", "10", "-q"])
        .env_remove("WORDLIST_MIN_LENGTH")
        .env_remove("WORDLIST_MAX_LENGTH")
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(!lines.is_empty());
    assert!(lines.contains(&"john1990"));
    assert!(lines.iter().all(|l| (6..=10).contains(&l.chars().count())));
}

#[test]
fn test_cli_json_export_with_search() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.json");
    TargetConfig::sample().save(&target).unwrap();
    let output = dir.path().join("filtered");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("-c")
        .arg(&target)
        .arg("-o")
        .arg(&output)
        .args(["-f", "json", "--search", "BUDDY", "--length", "9", "-q"])
        .env_remove("WORDLIST_MIN_LENGTH")
        .env_remove("WORDLIST_MAX_LENGTH")
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("filtered.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let passwords = value["passwords"].as_array().unwrap();
    assert!(!passwords.is_empty());
    for password in passwords {
        let password = password.as_str().unwrap();
        assert!(password.to_lowercase().contains("buddy"));
        assert_eq!(password.chars().count(), 9);
    }
    assert_eq!(value["count"], passwords.len());
}

#[test]
fn test_cli_preview() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.json");
    TargetConfig::sample().save(&target).unwrap();

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("--config")
        .arg(&target)
        .args(["--preview", "-q"])
        .env_remove("WORDLIST_MIN_LENGTH")
        .env_remove("WORDLIST_MAX_LENGTH")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wordlist Preview"));
}

#[test]
fn test_cli_rejects_invalid_lengths() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target.json");
    TargetConfig::sample().save(&target).unwrap();

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("--config")
        .arg(&target)
        .args(["--min-length", "10", "--max-length", "5", "-q"])
        .env_remove("WORDLIST_MIN_LENGTH")
        .env_remove("WORDLIST_MAX_LENGTH")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_library_initialization() {
    assert!(wordlist_forge::init().is_ok());
}
