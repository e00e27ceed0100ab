//! Wordlist Forge - target-profile password wordlist generator
//!
//! Collects facts about a target interactively or from a JSON target file and
//! writes the generated wordlist to disk.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use wordlist_forge::{
    output::{export_filename, sanitize_filename},
    questionnaire::DataCollector,
    ForgeError, OutputFormat, OutputManager, Result, TargetConfig, WordlistGenerator,
    WordlistView,
};

const PREVIEW_LIMIT: usize = 20;

/// Generate custom password wordlists from target intelligence for authorized
/// security testing.
#[derive(Parser, Debug)]
#[command(name = "wordlist-forge", version, about)]
struct Cli {
    /// Load the target from a JSON file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file (default: <first name>_wordlist.<format>)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Txt)]
    format: OutputFormat,

    /// Minimum password length, overrides the target file
    #[arg(long, env = "WORDLIST_MIN_LENGTH")]
    min_length: Option<usize>,

    /// Maximum password length, overrides the target file
    #[arg(long, env = "WORDLIST_MAX_LENGTH")]
    max_length: Option<usize>,

    /// Keep only passwords containing this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Keep only passwords of exactly this length
    #[arg(long, value_name = "N")]
    length: Option<usize>,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Detailed output and debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Show a sample of the passwords instead of writing a file
    #[arg(short, long)]
    preview: bool,

    /// Never prompt; requires --config
    #[arg(long)]
    batch: bool,

    /// Write an example target file and exit
    #[arg(long, value_name = "FILE")]
    sample_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed flags
    if let Err(e) = wordlist_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Err(e) = run(&cli) {
        if e.is_cancelled() {
            eprintln!("\n❌ Operation cancelled by user");
        } else {
            eprintln!("{}", e.user_message());
        }
        process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "wordlist_forge=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

/// Main wordlist forge workflow
fn run(cli: &Cli) -> Result<()> {
    if !cli.quiet {
        print_banner();
    }

    if let Some(path) = &cli.sample_config {
        TargetConfig::sample().save(path)?;
        println!("📝 Sample target written to {}", path.display());
        return Ok(());
    }

    let mut target = match (&cli.config, cli.batch) {
        (Some(path), _) => {
            if cli.verbose {
                println!("📁 Loading target from {}", path.display());
            }
            TargetConfig::load(path)?
        }
        (None, true) => {
            return Err(ForgeError::cli("Batch mode requires --config"));
        }
        (None, false) => DataCollector::new(cli.quiet).collect_all()?,
    };

    if let Some(min) = cli.min_length {
        target.options.min_length = min;
    }
    if let Some(max) = cli.max_length {
        target.options.max_length = max;
    }
    target.options.validate()?;

    let generator = WordlistGenerator::new(target.options.clone());
    let spinner = progress_spinner(cli.quiet);
    let (wordlist, _report) = generator.generate_with_report(
        &target.personal_info,
        &target.social_media,
        &target.recon_info,
        |stat| {
            spinner.set_message(format!("{} pass: +{} ({} total)", stat.pass, stat.added, stat.total));
        },
    );
    spinner.finish_and_clear();

    let wordlist = if cli.search.is_some() || cli.length.is_some() {
        WordlistView::new(&wordlist)
            .with_search(cli.search.clone().unwrap_or_default())
            .with_length(cli.length)
            .to_wordlist()
    } else {
        wordlist
    };

    let manager = OutputManager::new(cli.format, cli.verbose);

    if cli.preview {
        manager.preview(&wordlist, PREVIEW_LIMIT);
        return Ok(());
    }

    let output = output_path(cli.output.as_deref(), &target, cli.format);
    let written = manager.save(&wordlist, &output)?;

    if !cli.quiet {
        println!("✅ Wordlist generated successfully!");
        println!("📊 Total passwords: {}", wordlist.count);
        println!("💾 Saved to: {}", written.display());
    }

    if cli.verbose {
        manager.statistics(&wordlist);
    }

    Ok(())
}

/// Sanitized output path; the default is named after the target
fn output_path(requested: Option<&Path>, target: &TargetConfig, format: OutputFormat) -> PathBuf {
    let Some(path) = requested else {
        return PathBuf::from(export_filename(&target.personal_info, format));
    };

    let file_name = path
        .file_name()
        .map(|name| sanitize_filename(&name.to_string_lossy()))
        .unwrap_or_else(|| "wordlist".to_string());
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn progress_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Generating wordlist...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_banner() {
    println!("🔐 Wordlist Forge v{} - target-profile password wordlists", wordlist_forge::VERSION);
    println!("═══════════════════════════════════════════════════════");
    println!();
    println!("⚠️  WARNING: This tool is for authorized security testing only!");
    println!("   Using it against systems without explicit permission is");
    println!("   illegal and unethical. Always ensure proper authorization.");
    println!();
}
