//! Command-line interface for content-indexer.
//!
//! Provides commands for generating navigation indexes, timeline event
//! lists (geojson / storymap) and the TimelineJS spreadsheet.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, LocaleSource, OutputMode, ResolvedConfig};
use crate::core::{EventArtifact, Generator, Report};
use crate::domain::Locale;

/// content-indexer - Build-time indexes for the multilingual content tree
#[derive(Parser, Debug)]
#[command(name = "content-indexer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate navigation indexes (paths/<locale>.json)
    Paths {
        /// Output layout (defaults to the configured mode)
        #[arg(short, long, value_enum)]
        mode: Option<IndexMode>,

        /// Only index allow-listed locales that exist on disk
        #[arg(long)]
        discover_locales: bool,
    },

    /// Extract timeline events for geojson maps (no bodies)
    Geojson {
        /// Locale to extract (default: ar)
        #[arg(short = 'l', long = "lang")]
        locale: Option<String>,
    },

    /// Extract timeline events with raw bodies for storymaps
    Storymap {
        /// Locale to extract (default: ar)
        #[arg(short = 'l', long = "lang")]
        locale: Option<String>,
    },

    /// Generate a TimelineJS CSV with HTML bodies
    Timelinejs {
        /// Locale to extract (default: ur)
        #[arg(short = 'l', long = "lang")]
        locale: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Navigation index layout for CLI (maps to OutputMode)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IndexMode {
    /// One JSON file per locale
    PerLocale,

    /// A single JSON file keyed by locale
    Combined,
}

impl From<IndexMode> for OutputMode {
    fn from(m: IndexMode) -> Self {
        match m {
            IndexMode::PerLocale => OutputMode::PerLocale,
            IndexMode::Combined => OutputMode::Combined,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = config::config()?.clone();

        match self.command {
            Commands::Paths {
                mode,
                discover_locales,
            } => generate_paths(config, mode, discover_locales).await,
            Commands::Geojson { locale } => {
                let locale = pick_locale(locale, &config.default_locale)?;
                generate_events(config, EventArtifact::GeoJson, locale).await
            }
            Commands::Storymap { locale } => {
                let locale = pick_locale(locale, &config.default_locale)?;
                generate_events(config, EventArtifact::StoryMap, locale).await
            }
            Commands::Timelinejs { locale } => {
                let locale = pick_locale(locale, &config.timelinejs_locale)?;
                generate_events(config, EventArtifact::TimelineJs, locale).await
            }
            Commands::Config => show_config(&config),
        }
    }
}

/// Requested locale, or the command's fallback when none was given
fn pick_locale(requested: Option<String>, fallback: &Locale) -> Result<Locale> {
    match requested.filter(|l| !l.trim().is_empty()) {
        Some(code) => Locale::parse(&code).with_context(|| format!("Invalid --lang value: {}", code)),
        None => Ok(fallback.clone()),
    }
}

/// Generate navigation indexes
async fn generate_paths(
    mut config: ResolvedConfig,
    mode: Option<IndexMode>,
    discover_locales: bool,
) -> Result<()> {
    if let Some(mode) = mode {
        config.output_mode = mode.into();
    }
    if discover_locales {
        config.locale_source = LocaleSource::Discover;
    }

    let report = Generator::new(config)
        .generate_paths()
        .await
        .context("Failed to generate paths")?;

    print_report(&report, "entries");
    Ok(())
}

/// Generate one event artifact for one locale
async fn generate_events(
    config: ResolvedConfig,
    artifact: EventArtifact,
    locale: Locale,
) -> Result<()> {
    let report = Generator::new(config)
        .generate_events(artifact, &locale)
        .await
        .with_context(|| format!("Failed to generate {} events", artifact.file_prefix()))?;

    print_report(&report, "events");
    Ok(())
}

fn print_report(report: &Report, unit: &str) {
    for file in &report.files {
        println!(
            "✅ {} created with {} {}.",
            file.path.display(),
            file.entries,
            unit
        );
    }
    for skipped in &report.skipped {
        eprintln!("  skipped {}: {}", skipped.file_name, skipped.reason);
    }
}

/// Print the resolved configuration as YAML
fn show_config(config: &ResolvedConfig) -> Result<()> {
    match &config.config_file {
        Some(path) => println!("# Config file: {}", path.display()),
        None => println!("# Config file: none (using defaults)"),
    }
    let yaml = serde_yaml::to_string(config).context("Failed to render configuration")?;
    print!("{}", yaml);
    Ok(())
}
